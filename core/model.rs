/// A fitted model. The training pipeline only produces one of these once every statistic has been computed, so all of the fields of the inner `FittedModel` are present.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Model {
	RandomForest(FittedModel),
	RidgeRegressor(FittedModel),
	MultiLayerPerceptron(FittedModel),
	SupportVectorMachine(FittedModel),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelType {
	RandomForest,
	MultiLayerPerceptron,
	SupportVectorMachine,
	RidgeRegressor,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct FittedModel {
	#[serde(default)]
	pub config: ModelConfig,
	pub training_metrics: TrainingMetrics,
	pub testing_metrics: TestingMetrics,
}

/// The optional steps that ran before and during training. `None` means the step was not enabled.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ModelConfig {
	#[serde(default)]
	pub feature_selection: Option<FeatureSelection>,
	#[serde(default)]
	pub unsupervised: Option<Unsupervised>,
	#[serde(default)]
	pub hyper_opt: Option<HyperOpt>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct FeatureSelection {
	pub feature_number: usize,
	pub algorithm: String,
}

/// Dimensionality reduction applied to the features before training.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct Unsupervised {
	pub algorithm: String,
}

/// Bayesian hyperparameter optimization.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct HyperOpt {
	pub iterations: usize,
}

/// Metrics computed over the cross validation folds of the training set.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TrainingMetrics {
	pub rmse: MeanStd,
	pub r_squared: MeanStd,
	pub mae: MeanStd,
	/// The percentage of predictions within a factor of two of the label.
	pub percentage_2fold_error: MeanStd,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MeanStd {
	pub mean: f64,
	pub std: f64,
}

/// Metrics computed once on the held out test set.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TestingMetrics {
	pub rmse: f64,
	pub r_squared: f64,
	pub mae: f64,
	pub percentage_2fold_error: f64,
}

impl Model {
	pub fn model_type(&self) -> ModelType {
		match self {
			Model::RandomForest(_) => ModelType::RandomForest,
			Model::RidgeRegressor(_) => ModelType::RidgeRegressor,
			Model::MultiLayerPerceptron(_) => ModelType::MultiLayerPerceptron,
			Model::SupportVectorMachine(_) => ModelType::SupportVectorMachine,
		}
	}

	pub fn fitted(&self) -> &FittedModel {
		match self {
			Model::RandomForest(model)
			| Model::RidgeRegressor(model)
			| Model::MultiLayerPerceptron(model)
			| Model::SupportVectorMachine(model) => model,
		}
	}
}

impl ModelType {
	pub fn label(self) -> &'static str {
		match self {
			ModelType::RandomForest => "Random Forest",
			ModelType::MultiLayerPerceptron => "Multi-layer Perceptron",
			ModelType::SupportVectorMachine => "Support Vector Machine",
			ModelType::RidgeRegressor => "Ridge Regressor",
		}
	}
}

impl std::fmt::Display for ModelType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.label())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_deserialize_model() {
		let json = r#"{
			"type": "multi_layer_perceptron",
			"config": {
				"hyper_opt": { "iterations": 25 }
			},
			"training_metrics": {
				"rmse": { "mean": 1.5, "std": 0.1 },
				"r_squared": { "mean": 0.8, "std": 0.02 },
				"mae": { "mean": 1.1, "std": 0.05 },
				"percentage_2fold_error": { "mean": 91.0, "std": 1.5 }
			},
			"testing_metrics": {
				"rmse": 1.6,
				"r_squared": 0.78,
				"mae": 1.2,
				"percentage_2fold_error": 90.0
			}
		}"#;
		let model: Model = serde_json::from_str(json).unwrap();
		assert_eq!(model.model_type(), ModelType::MultiLayerPerceptron);
		let fitted = model.fitted();
		assert_eq!(fitted.config.feature_selection, None);
		assert_eq!(fitted.config.unsupervised, None);
		assert_eq!(fitted.config.hyper_opt, Some(HyperOpt { iterations: 25 }));
		assert_eq!(fitted.training_metrics.rmse, MeanStd { mean: 1.5, std: 0.1 });
		assert_eq!(fitted.testing_metrics.percentage_2fold_error, 90.0);
	}

	#[test]
	fn test_unknown_model_type_is_rejected() {
		let json = r#"{ "type": "gradient_boosted_trees" }"#;
		assert!(serde_json::from_str::<Model>(json).is_err());
	}

	#[test]
	fn test_model_type_labels() {
		assert_eq!(ModelType::RandomForest.label(), "Random Forest");
		assert_eq!(
			ModelType::MultiLayerPerceptron.label(),
			"Multi-layer Perceptron"
		);
		assert_eq!(
			ModelType::SupportVectorMachine.label(),
			"Support Vector Machine"
		);
		assert_eq!(ModelType::RidgeRegressor.to_string(), "Ridge Regressor");
	}
}
