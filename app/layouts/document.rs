use html::{component, html};

#[derive(Clone)]
pub struct PageInfo {
	pub title: String,
}

#[component]
pub fn Document(page_info: PageInfo) {
	html! {
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta content="width=device-width, initial-scale=1" name="viewport" />
				<title>{page_info.title}</title>
				<link href="/styles.css" rel="stylesheet" />
			</head>
			<body>
				{children}
			</body>
		</html>
	}
}

/// Render a page whose root is a `Document` to a complete html response body.
pub fn render_page(page: html::Node) -> String {
	format!("<!doctype html>{}", page.render_to_string())
}
