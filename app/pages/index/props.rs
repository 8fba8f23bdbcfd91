use crate::{
	layouts::app_layout::{get_app_layout_info, AppLayoutInfo},
	Context,
};
use modelview_core::registry::model_key;

#[derive(serde::Serialize, Clone, Debug)]
pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	pub models: Vec<ModelItem>,
}

#[derive(serde::Serialize, Clone, Debug)]
pub struct ModelItem {
	pub href: String,
	pub title: String,
	pub description: String,
}

pub fn props(context: &Context) -> Props {
	let models = context
		.registry
		.slots()
		.map(|(index, model)| ModelItem {
			href: format!("/models/{}", index),
			title: model_key(index),
			description: model
				.map(|model| model.model_type().label().to_owned())
				.unwrap_or_else(|| "Not created".to_owned()),
		})
		.collect();
	Props {
		app_layout_info: get_app_layout_info(context),
		models,
	}
}
