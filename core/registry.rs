use crate::model::Model;
use anyhow::{format_err, Result};
use std::{collections::BTreeMap, path::Path};

const MODEL_KEY_PREFIX: &str = "Model ";

/// The models the dashboard can display, keyed by their 1-based slot index. A slot holding `None` exists but its model has not been created yet.
#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
	slots: BTreeMap<usize, Option<Model>>,
}

/// Format the registry key for the slot at `index`.
pub fn model_key(index: usize) -> String {
	format!("{}{}", MODEL_KEY_PREFIX, index)
}

/// Parse a slot index written as ascii digits only. Unlike `str::parse`, a leading `+` is rejected.
pub fn parse_model_index(index: &str) -> Option<usize> {
	if index.is_empty() || !index.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	index.parse().ok()
}

/// Parse a registry key of the form `Model N` with `N >= 1`.
pub fn parse_model_key(key: &str) -> Option<usize> {
	parse_model_index(key.strip_prefix(MODEL_KEY_PREFIX)?).filter(|index| *index >= 1)
}

impl ModelRegistry {
	pub fn new() -> ModelRegistry {
		ModelRegistry::default()
	}

	/// Create a registry with empty slots `Model 1` through `Model {slot_count}`.
	pub fn with_slot_count(slot_count: usize) -> ModelRegistry {
		let slots = (1..=slot_count).map(|index| (index, None)).collect();
		ModelRegistry { slots }
	}

	/// Deserialize a registry from a json object mapping `Model N` keys to models or `null`.
	pub fn from_slice(slice: &[u8]) -> Result<ModelRegistry> {
		let entries: BTreeMap<String, Option<Model>> = serde_json::from_slice(slice)?;
		let mut slots = BTreeMap::new();
		for (key, model) in entries {
			let index = parse_model_key(&key)
				.ok_or_else(|| format_err!("invalid model key \"{}\"", key))?;
			if slots.insert(index, model).is_some() {
				return Err(format_err!("duplicate model key \"{}\"", key));
			}
		}
		Ok(ModelRegistry { slots })
	}

	/// Deserialize a registry by reading the file at `path`.
	pub fn from_path(path: &Path) -> Result<ModelRegistry> {
		let data = std::fs::read(path)
			.map_err(|error| format_err!("failed to read {}: {}", path.display(), error))?;
		ModelRegistry::from_slice(&data)
	}

	/// Place `model` in the slot at `index`, creating the slot if necessary.
	pub fn insert(&mut self, index: usize, model: Option<Model>) {
		self.slots.insert(index, model);
	}

	/// Retrieve the model stored under `key`. Both missing slots and empty slots return `None`.
	pub fn get(&self, key: &str) -> Option<&Model> {
		let index = parse_model_key(key)?;
		self.get_by_index(index)
	}

	pub fn get_by_index(&self, index: usize) -> Option<&Model> {
		self.slots.get(&index).and_then(|model| model.as_ref())
	}

	/// Iterate over the slots in index order.
	pub fn slots(&self) -> impl Iterator<Item = (usize, Option<&Model>)> {
		self.slots
			.iter()
			.map(|(index, model)| (*index, model.as_ref()))
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::model::{
		FittedModel, MeanStd, ModelConfig, ModelType, TestingMetrics, TrainingMetrics,
	};

	fn fitted_model() -> FittedModel {
		let mean_std = MeanStd {
			mean: 1.0,
			std: 0.1,
		};
		FittedModel {
			config: ModelConfig::default(),
			training_metrics: TrainingMetrics {
				rmse: mean_std,
				r_squared: mean_std,
				mae: mean_std,
				percentage_2fold_error: mean_std,
			},
			testing_metrics: TestingMetrics {
				rmse: 1.0,
				r_squared: 1.0,
				mae: 1.0,
				percentage_2fold_error: 1.0,
			},
		}
	}

	#[test]
	fn test_model_key() {
		assert_eq!(model_key(3), "Model 3");
		assert_eq!(parse_model_key("Model 3"), Some(3));
		assert_eq!(parse_model_key("Model 0"), None);
		assert_eq!(parse_model_key("Model three"), None);
		assert_eq!(parse_model_key("model 3"), None);
		assert_eq!(parse_model_key("Model +3"), None);
		assert_eq!(parse_model_key("Model  3"), None);
		assert_eq!(parse_model_key("Model "), None);
	}

	#[test]
	fn test_parse_model_index() {
		assert_eq!(parse_model_index("0"), Some(0));
		assert_eq!(parse_model_index("42"), Some(42));
		assert_eq!(parse_model_index("+1"), None);
		assert_eq!(parse_model_index("-1"), None);
		assert_eq!(parse_model_index(""), None);
		assert_eq!(parse_model_index("99999999999999999999999"), None);
	}

	#[test]
	fn test_get() {
		let mut registry = ModelRegistry::with_slot_count(2);
		registry.insert(2, Some(Model::RidgeRegressor(fitted_model())));
		assert!(registry.get("Model 1").is_none());
		assert!(registry.get("Model 5").is_none());
		assert!(matches!(
			registry.get("Model 2"),
			Some(Model::RidgeRegressor(_))
		));
		assert!(registry.get_by_index(2).is_some());
	}

	#[test]
	fn test_slots_are_in_numeric_order() {
		let mut registry = ModelRegistry::new();
		for index in &[10, 2, 1, 9] {
			registry.insert(*index, None);
		}
		let indices = registry
			.slots()
			.map(|(index, _)| index)
			.collect::<Vec<_>>();
		assert_eq!(indices, vec![1, 2, 9, 10]);
	}

	#[test]
	fn test_from_slice() {
		let json = br#"{
			"Model 2": null,
			"Model 1": {
				"type": "random_forest",
				"config": {
					"feature_selection": { "feature_number": 5, "algorithm": "LASSO" },
					"unsupervised": { "algorithm": "PCA" }
				},
				"training_metrics": {
					"rmse": { "mean": 1.2345, "std": 0.06789 },
					"r_squared": { "mean": 0.9, "std": 0.01 },
					"mae": { "mean": 0.9, "std": 0.05 },
					"percentage_2fold_error": { "mean": 95.5, "std": 0.75 }
				},
				"testing_metrics": {
					"rmse": 1.3,
					"r_squared": 0.88,
					"mae": 1.0,
					"percentage_2fold_error": 94.25
				}
			}
		}"#;
		let registry = ModelRegistry::from_slice(json).unwrap();
		assert_eq!(registry.len(), 2);
		assert!(registry.get("Model 2").is_none());
		let model = registry.get("Model 1").unwrap();
		let feature_selection = model.fitted().config.feature_selection.as_ref().unwrap();
		assert_eq!(feature_selection.feature_number, 5);
		assert_eq!(feature_selection.algorithm, "LASSO");
	}

	#[test]
	fn test_demo_registry() {
		let registry = ModelRegistry::from_slice(include_bytes!("../demos/models.json")).unwrap();
		let model_types = registry
			.slots()
			.map(|(_, model)| model.map(|model| model.model_type()))
			.collect::<Vec<_>>();
		assert_eq!(
			model_types,
			vec![
				Some(ModelType::RidgeRegressor),
				Some(ModelType::RandomForest),
				Some(ModelType::SupportVectorMachine),
				None,
			]
		);
	}

	#[test]
	fn test_from_slice_rejects_invalid_keys() {
		let error = ModelRegistry::from_slice(br#"{ "First model": null }"#).unwrap_err();
		assert_eq!(error.to_string(), "invalid model key \"First model\"");
		let error = ModelRegistry::from_slice(br#"{ "Model +1": null }"#).unwrap_err();
		assert_eq!(error.to_string(), "invalid model key \"Model +1\"");
		let error = ModelRegistry::from_slice(br#"{ "Model 1": null, "Model 01": null }"#)
			.unwrap_err();
		assert_eq!(error.to_string(), "duplicate model key \"Model 1\"");
	}
}
