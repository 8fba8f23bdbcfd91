use super::props::SummaryCardProps;
use html::{component, html, style};
use modelview_ui as ui;

#[component]
pub fn SummaryCard(model_index: usize, props: SummaryCardProps) {
	let card_style = style! {
		"width" => "75%",
		"margin-left" => "200px",
		"border" => "2px solid black",
		"margin-top" => "50px",
	};
	let body_style = style! {
		"display" => "flex",
	};
	let training = props.training_stats;
	let testing = props.testing_stats;
	html! {
		<ui::Card id={Some(format!("model-summary-card-{}", model_index))} style={Some(card_style)}>
			<ui::CardHeader id={Some("card-header-model".to_owned())}>
				{"Summary information"}
			</ui::CardHeader>
			<ui::CardBody id={Some("card-body-model".to_owned())} style={Some(body_style)}>
				<SummaryPanel
					id={"card-body-model-info".to_owned()}
					title={"Model Input Details".to_owned()}
					border_right={true}
					padding_left={false}
				>
					<ui::P>{format!("Model Type: {}", props.model_type)}</ui::P>
					<ui::P>{format!("Feature Selection: {}", props.feature_selection)}</ui::P>
					<ui::P>{format!("Unsupervised Learning: {}", props.unsupervised_learning)}</ui::P>
					<ui::P>{format!("Hyperparameter Optimization: {}", props.hyper_opt)}</ui::P>
				</SummaryPanel>
				<SummaryPanel
					id={"card-body-model-training".to_owned()}
					title={"Training Statistics".to_owned()}
					border_right={true}
					padding_left={true}
				>
					<ui::P>{format!("RMSE: {}", training.rmse)}</ui::P>
					<ui::P>{format!("R-squared: {}", training.r_squared)}</ui::P>
					<ui::P>{format!("MAE: {}", training.mae)}</ui::P>
					<ui::P>{format!("Percentage within 2-fold error: {}", training.percentage_2fold_error)}</ui::P>
				</SummaryPanel>
				<SummaryPanel
					id={"card-body-model-testing".to_owned()}
					title={"Testing Statistics".to_owned()}
					border_right={false}
					padding_left={true}
				>
					<ui::P>{format!("RMSE: {}", testing.rmse)}</ui::P>
					<ui::P>{format!("R-squared: {}", testing.r_squared)}</ui::P>
					<ui::P>{format!("MAE: {}", testing.mae)}</ui::P>
					<ui::P>{format!("Percentage within 2-fold error: {}", testing.percentage_2fold_error)}</ui::P>
				</SummaryPanel>
			</ui::CardBody>
		</ui::Card>
	}
}

/// One of the three side by side columns of the summary card. Columns followed by another column draw a border on their right.
#[component]
fn SummaryPanel(id: String, title: String, border_right: bool, padding_left: bool) {
	let style = style! {
		"flex" => "1",
		"display" => "flex",
		"flex-direction" => "column",
		"justify-content" => "space-between",
		"border-right" => if border_right { Some("1px solid black") } else { None },
		"padding-right" => if border_right { Some("10px") } else { None },
		"padding-left" => if padding_left { Some("10px") } else { None },
	};
	html! {
		<div id={id} style={style}>
			<ui::H4 center={Some(true)}>{title}</ui::H4>
			{children}
		</div>
	}
}
