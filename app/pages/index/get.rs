use super::{page::Page, props::props};
use crate::{layouts::document::render_page, Context};
use anyhow::Result;
use html::html;
use hyper::{header, Body, Request, Response, StatusCode};

pub async fn get(context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let props = props(context);
	let html = render_page(html! { <Page props={props} /> });
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}
