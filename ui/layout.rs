use html::{classes, component, html};

#[component]
pub fn S1() {
	html! {
		<div class="s1">
			{children}
		</div>
	}
}

#[component]
pub fn S2() {
	html! {
		<div class="s2">{children}</div>
	}
}

#[component]
pub fn H1(id: Option<String>, center: Option<bool>) {
	let center = center.and_then(|center| if center { Some("center") } else { None });
	html! {
		<h1 id={id} class={classes!("h1", center)}>
			{children}
		</h1>
	}
}

#[component]
pub fn H4(center: Option<bool>) {
	let center = center.and_then(|center| if center { Some("center") } else { None });
	let style = if center.is_some() {
		Some("text-align: center")
	} else {
		None
	};
	html! {
		<h4 class={classes!("h4", center)} style={style}>
			{children}
		</h4>
	}
}

#[component]
pub fn P() {
	html! {
		<p class="p">{children}</p>
	}
}

#[component]
pub fn List() {
	html! {
		<ul class="list">{children}</ul>
	}
}

#[component]
pub fn ListItem() {
	html! {
		<li>{children}</li>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_headings() {
		let html = html! {
			<S1>
				<H1 id={Some("page-header".to_owned())} center={None}>{"Title"}</H1>
				<H4 center={Some(true)}>{"Section"}</H4>
			</S1>
		}
		.render_to_string();
		assert_eq!(
			html,
			concat!(
				r#"<div class="s1">"#,
				r#"<h1 id="page-header" class="h1">Title</h1>"#,
				r#"<h4 class="h4 center" style="text-align: center">Section</h4>"#,
				"</div>",
			)
		);
	}
}
