use super::props::Props;
use crate::layouts::{app_layout::AppLayout, document::PageInfo};
use html::{component, html};
use modelview_ui as ui;

#[component]
pub fn Page(props: Props) {
	let items = props
		.models
		.into_iter()
		.map(|model| {
			html! {
				<ui::ListItem>
					<ui::Link href={model.href} class_name={None}>
						{model.title}
					</ui::Link>
					{format!(" ({})", model.description)}
				</ui::ListItem>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<AppLayout
			page_info={PageInfo { title: "Model outputs".to_owned() }}
			info={props.app_layout_info}
			selected_model_index={None}
		>
			<ui::S1>
				<ui::H1 id={None} center={None}>{"Model outputs"}</ui::H1>
				<ui::S2>
					<ui::List>{items}</ui::List>
				</ui::S2>
			</ui::S1>
		</AppLayout>
	}
}
