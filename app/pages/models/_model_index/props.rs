use crate::{
	layouts::app_layout::{get_app_layout_info, AppLayoutInfo},
	Context,
};
use modelview_core::model::{MeanStd, Model, ModelConfig};
use modelview_ui::format_rounded;

const NOT_ENABLED: &str = "Not enabled";

#[derive(serde::Serialize, Clone, Debug)]
pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	pub model_index: usize,
	pub title: String,
	pub inner: Inner,
}

#[derive(serde::Serialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
#[serde(tag = "type", content = "value")]
pub enum Inner {
	NotCreated,
	Summary(SummaryCardProps),
}

#[derive(serde::Serialize, Clone, Debug)]
pub struct SummaryCardProps {
	pub model_type: String,
	pub feature_selection: String,
	pub unsupervised_learning: String,
	pub hyper_opt: String,
	pub training_stats: TrainingStats,
	pub testing_stats: TestingStats,
}

/// Each value is `mean ± std`.
#[derive(serde::Serialize, Clone, Debug)]
pub struct TrainingStats {
	pub rmse: String,
	pub r_squared: String,
	pub mae: String,
	pub percentage_2fold_error: String,
}

#[derive(serde::Serialize, Clone, Debug)]
pub struct TestingStats {
	pub rmse: String,
	pub r_squared: String,
	pub mae: String,
	pub percentage_2fold_error: String,
}

pub fn props(context: &Context, model_index: usize) -> Props {
	let inner = match context.registry.get_by_index(model_index) {
		Some(model) => Inner::Summary(summary_card_props(model)),
		None => Inner::NotCreated,
	};
	Props {
		app_layout_info: get_app_layout_info(context),
		model_index,
		title: format!("Model {} output", model_index),
		inner,
	}
}

pub fn summary_card_props(model: &Model) -> SummaryCardProps {
	let fitted = model.fitted();
	let training_metrics = &fitted.training_metrics;
	let testing_metrics = &fitted.testing_metrics;
	SummaryCardProps {
		model_type: model.model_type().label().to_owned(),
		feature_selection: feature_selection_description(&fitted.config),
		unsupervised_learning: unsupervised_learning_description(&fitted.config),
		hyper_opt: hyper_opt_description(&fitted.config),
		training_stats: TrainingStats {
			rmse: format_mean_std(training_metrics.rmse),
			r_squared: format_mean_std(training_metrics.r_squared),
			mae: format_mean_std(training_metrics.mae),
			percentage_2fold_error: format_mean_std(training_metrics.percentage_2fold_error),
		},
		testing_stats: TestingStats {
			rmse: format_rounded(testing_metrics.rmse, 2),
			r_squared: format_rounded(testing_metrics.r_squared, 2),
			mae: format_rounded(testing_metrics.mae, 2),
			percentage_2fold_error: format!(
				"{}%",
				format_rounded(testing_metrics.percentage_2fold_error, 2)
			),
		},
	}
}

fn feature_selection_description(config: &ModelConfig) -> String {
	match &config.feature_selection {
		Some(feature_selection) => format!(
			"{} features selected using {}",
			feature_selection.feature_number, feature_selection.algorithm
		),
		None => NOT_ENABLED.to_owned(),
	}
}

fn unsupervised_learning_description(config: &ModelConfig) -> String {
	match &config.unsupervised {
		Some(unsupervised) => format!("{} used", unsupervised.algorithm),
		None => NOT_ENABLED.to_owned(),
	}
}

fn hyper_opt_description(config: &ModelConfig) -> String {
	match &config.hyper_opt {
		Some(hyper_opt) => format!(
			"Bayesian Hyperparameter Optimization with {} iterations",
			hyper_opt.iterations
		),
		None => NOT_ENABLED.to_owned(),
	}
}

fn format_mean_std(value: MeanStd) -> String {
	format!(
		"{} ± {}",
		format_rounded(value.mean, 2),
		format_rounded(value.std, 4)
	)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test::{context, random_forest, ridge_regressor};
	use modelview_core::model::{FittedModel, HyperOpt, Unsupervised};

	fn with_fitted(model: &Model, f: impl Fn(FittedModel) -> Model) -> Model {
		f(model.fitted().clone())
	}

	#[test]
	fn test_model_type_labels() {
		let ridge = ridge_regressor();
		let cases = vec![
			(with_fitted(&ridge, Model::RandomForest), "Random Forest"),
			(
				with_fitted(&ridge, Model::MultiLayerPerceptron),
				"Multi-layer Perceptron",
			),
			(
				with_fitted(&ridge, Model::SupportVectorMachine),
				"Support Vector Machine",
			),
			(with_fitted(&ridge, Model::RidgeRegressor), "Ridge Regressor"),
		];
		for (model, label) in cases {
			assert_eq!(summary_card_props(&model).model_type, label);
		}
	}

	#[test]
	fn test_summary_card_props() {
		let props = summary_card_props(&ridge_regressor());
		insta::assert_debug_snapshot!(props, @r###"
		SummaryCardProps {
		    model_type: "Ridge Regressor",
		    feature_selection: "5 features selected using LASSO",
		    unsupervised_learning: "Not enabled",
		    hyper_opt: "Bayesian Hyperparameter Optimization with 50 iterations",
		    training_stats: TrainingStats {
		        rmse: "1.23 ± 0.0679",
		        r_squared: "0.88 ± 0.0123",
		        mae: "0.99 ± 0.0432",
		        percentage_2fold_error: "93.46 ± 1.2346",
		    },
		    testing_stats: TestingStats {
		        rmse: "1.3",
		        r_squared: "0.85",
		        mae: "1.0",
		        percentage_2fold_error: "92.86%",
		    },
		}
		"###);
	}

	#[test]
	fn test_disabled_options() {
		let props = summary_card_props(&random_forest());
		assert_eq!(props.feature_selection, "Not enabled");
		assert_eq!(props.unsupervised_learning, "PCA used");
		assert_eq!(props.hyper_opt, "Not enabled");
	}

	#[test]
	fn test_enabled_options() {
		let mut fitted = random_forest().fitted().clone();
		fitted.config.unsupervised = Some(Unsupervised {
			algorithm: "t-SNE".to_owned(),
		});
		fitted.config.hyper_opt = Some(HyperOpt { iterations: 10 });
		let props = summary_card_props(&Model::SupportVectorMachine(fitted));
		assert_eq!(props.unsupervised_learning, "t-SNE used");
		assert_eq!(
			props.hyper_opt,
			"Bayesian Hyperparameter Optimization with 10 iterations"
		);
	}

	#[test]
	fn test_training_and_testing_stats_format() {
		for model in &[ridge_regressor(), random_forest()] {
			let props = summary_card_props(model);
			let training = &props.training_stats;
			for value in &[
				&training.rmse,
				&training.r_squared,
				&training.mae,
				&training.percentage_2fold_error,
			] {
				assert!(value.contains(" ± "));
			}
			let testing = &props.testing_stats;
			for value in &[
				&testing.rmse,
				&testing.r_squared,
				&testing.mae,
				&testing.percentage_2fold_error,
			] {
				assert!(!value.contains('±'));
			}
			assert!(testing.percentage_2fold_error.ends_with('%'));
		}
		let props = summary_card_props(&random_forest());
		assert_eq!(props.training_stats.mae, "1.5 ± 0.125");
		assert_eq!(props.testing_stats.percentage_2fold_error, "78.5%");
	}

	#[test]
	fn test_props_for_missing_model() {
		let context = context();
		let props = props(&context, 3);
		assert_eq!(props.title, "Model 3 output");
		assert!(matches!(props.inner, Inner::NotCreated));
		let props = super::props(&context, 7);
		assert!(matches!(props.inner, Inner::NotCreated));
		assert_eq!(props.app_layout_info.model_slots.len(), 3);
	}
}
