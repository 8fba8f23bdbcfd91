use html::{classes, component, html};

/// The row of model tabs shown at the top of every page.
#[component]
pub fn TabBar() {
	html! {
		<nav class="tab-bar">{children}</nav>
	}
}

#[component]
pub fn TabLink(href: String, selected: Option<bool>) {
	let selected = selected.filter(|selected| *selected).map(|_| "tab-bar-tab-selected");
	html! {
		<a class={classes!("tab-bar-tab", selected)} href={href}>
			{children}
		</a>
	}
}
