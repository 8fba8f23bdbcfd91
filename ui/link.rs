use html::{classes, component, html};

/// An anchor styled as a link. `class_name` is appended to the `link` class.
#[component]
pub fn Link(href: String, class_name: Option<String>) {
	html! {
		<a class={classes!("link", class_name)} href={href}>
			{children}
		</a>
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_link() {
		let html = html! {
			<Link href={"/models/1".to_owned()} class_name={Some("app-layout-title".to_owned())}>
				{"Model 1"}
			</Link>
		}
		.render_to_string();
		assert_eq!(
			html,
			r#"<a class="link app-layout-title" href="/models/1">Model 1</a>"#
		);
	}
}
