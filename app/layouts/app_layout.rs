use super::document::{Document, PageInfo};
use crate::Context;
use html::{component, html};
use modelview_core::registry::model_key;
use modelview_ui as ui;

#[derive(serde::Serialize, Clone, Debug)]
pub struct AppLayoutInfo {
	pub model_slots: Vec<ModelSlot>,
}

#[derive(serde::Serialize, Clone, Debug)]
pub struct ModelSlot {
	pub index: usize,
	pub title: String,
}

pub fn get_app_layout_info(context: &Context) -> AppLayoutInfo {
	let model_slots = context
		.registry
		.slots()
		.map(|(index, _)| ModelSlot {
			index,
			title: model_key(index),
		})
		.collect();
	AppLayoutInfo { model_slots }
}

#[component]
pub fn AppLayout(page_info: PageInfo, info: AppLayoutInfo, selected_model_index: Option<usize>) {
	let tabs = info
		.model_slots
		.into_iter()
		.map(|model_slot| {
			html! {
				<ui::TabLink
					href={format!("/models/{}", model_slot.index)}
					selected={Some(selected_model_index == Some(model_slot.index))}
				>
					{model_slot.title}
				</ui::TabLink>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<Document page_info={page_info}>
			<div class="app-layout-topbar">
				<ui::Link href={"/".to_owned()} class_name={Some("app-layout-title".to_owned())}>
					{"Model outputs"}
				</ui::Link>
				<ui::TabBar>{tabs}</ui::TabBar>
			</div>
			<div class="app-layout">{children}</div>
		</Document>
	}
}
