use super::{
	props::{Inner, Props},
	summary_card::SummaryCard,
};
use crate::layouts::{app_layout::AppLayout, document::PageInfo};
use html::{component, html};
use modelview_ui as ui;

const NOT_CREATED_MESSAGE: &str =
	"No content available since the model hasn't been created or initiated.";

#[component]
pub fn Page(props: Props) {
	let Props {
		app_layout_info,
		model_index,
		title,
		inner,
	} = props;
	let contents = match inner {
		Inner::NotCreated => html! { <>{NOT_CREATED_MESSAGE}</> },
		Inner::Summary(summary_card_props) => html! {
			<SummaryCard model_index={model_index} props={summary_card_props} />
		},
	};
	html! {
		<AppLayout
			page_info={PageInfo { title: title.clone() }}
			info={app_layout_info}
			selected_model_index={Some(model_index)}
		>
			<div id="output-page">
				<div id="output-page-header">
					<ui::H1 id={None} center={None}>{title}</ui::H1>
				</div>
				<div id="output-page-contents">
					{contents}
				</div>
			</div>
		</AppLayout>
	}
}
