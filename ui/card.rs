use html::{component, html};

#[component]
pub fn Card(id: Option<String>, style: Option<String>) {
	html! {
		<div class="card" id={id} style={style}>
			{children}
		</div>
	}
}

#[component]
pub fn CardHeader(id: Option<String>) {
	html! {
		<div class="card-header" id={id}>
			{children}
		</div>
	}
}

#[component]
pub fn CardBody(id: Option<String>, style: Option<String>) {
	html! {
		<div class="card-body" id={id} style={style}>
			{children}
		</div>
	}
}
