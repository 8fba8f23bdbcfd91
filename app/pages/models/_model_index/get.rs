use super::{page::Page, props::props};
use crate::{common::error::Error, layouts::document::render_page, Context};
use anyhow::Result;
use html::html;
use hyper::{header, Body, Request, Response, StatusCode};
use modelview_core::registry::parse_model_index;

pub async fn get(
	context: &Context,
	_request: Request<Body>,
	model_index: &str,
) -> Result<Response<Body>> {
	let model_index = parse_model_index(model_index).ok_or(Error::BadRequest)?;
	let props = props(context, model_index);
	let html = render_page(html! { <Page props={props} /> });
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8")
		.body(Body::from(html))?;
	Ok(response)
}
