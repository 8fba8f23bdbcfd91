#![deny(unused_braces)]

use html::{classes, component, html, style};

#[component]
fn Panel(title: String, bordered: bool) {
	let style = style! {
		"border-right" => if bordered { Some("1px solid black") } else { None },
		"padding-right" => "10px",
	};
	html! {
		<div class={classes!("panel", if bordered { Some("bordered") } else { None })} style={style}>
			<h4>{title}</h4>
			{children}
		</div>
	}
}

#[component]
fn Test() {
	return html!(
	  <div>{"Hello World"}</div>
	);
}

#[test]
fn test() {
	let html = html!(<Test />).render_to_string();
	assert_eq!(html, "<div>Hello World</div>");
}

#[test]
fn test_nested_components() {
	let html = html! {
		<Panel title={"Outer".to_owned()} bordered={true}>
			<Panel title={"Inner".to_owned()} bordered={false}>
				<p>{"content"}</p>
			</Panel>
		</Panel>
	}
	.render_to_string();
	assert_eq!(
		html,
		concat!(
			r#"<div class="panel bordered" style="border-right: 1px solid black; padding-right: 10px">"#,
			"<h4>Outer</h4>",
			r#"<div class="panel" style="padding-right: 10px">"#,
			"<h4>Inner</h4>",
			"<p>content</p>",
			"</div>",
			"</div>",
		)
	);
}

#[test]
fn test_block_expressions() {
	let title = "Totals".to_owned();
	let count = 2;
	let html = html! {
		<div id={format!("panel-{}", count)} hidden={count == 0}>
			<Panel title={title} bordered={count > 1}>
				{format!("{} rows", count)}
				{
					let label = "done";
					label
				}
			</Panel>
		</div>
	}
	.render_to_string();
	assert_eq!(
		html,
		concat!(
			r#"<div id="panel-2">"#,
			r#"<div class="panel bordered" style="border-right: 1px solid black; padding-right: 10px">"#,
			"<h4>Totals</h4>",
			"2 rows",
			"done",
			"</div>",
			"</div>",
		)
	);
}
