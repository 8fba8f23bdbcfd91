use self::common::error::Error;
use hyper::{header, Body, Method, Request, Response, StatusCode};
use modelview_core::ModelRegistry;
use std::{borrow::Cow, sync::Arc};

mod api;
pub mod common;
mod layouts;
mod pages;

pub struct Options {
	pub host: std::net::IpAddr,
	pub port: u16,
}

/// The state shared by every request. The registry is fully loaded before the server starts and is never written afterward.
pub struct Context {
	pub registry: ModelRegistry,
}

async fn handle(context: Arc<Context>, request: Request<Body>) -> Response<Body> {
	let path = request.uri().path().to_owned();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let method = request.method().clone();
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &["health"]) => self::api::health::get(&context, request).await,
		(&Method::GET, &["styles.css"]) => self::api::styles::get(&context, request).await,
		(&Method::GET, &[""]) => self::pages::index::get(&context, request).await,
		(&Method::GET, &["models", model_index]) => {
			self::pages::models::_model_index::get(&context, request, model_index).await
		}
		(&Method::GET, &["models", model_index, "summary.json"]) => {
			self::pages::models::_model_index::data(&context, request, model_index).await
		}
		_ => Err(Error::NotFound.into()),
	};
	match result {
		Ok(response) => response,
		Err(error) => {
			if let Some(error) = error.downcast_ref::<Error>() {
				let status = match error {
					Error::BadRequest => StatusCode::BAD_REQUEST,
					Error::NotFound => StatusCode::NOT_FOUND,
				};
				let mut response = Response::new(Body::from(error.to_string()));
				*response.status_mut() = status;
				response
			} else {
				tracing::error!("{}", error);
				let body: Cow<str> = if cfg!(debug_assertions) {
					format!("{}", error).into()
				} else {
					"internal server error".into()
				};
				let mut response = Response::new(Body::from(body));
				*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
				response.headers_mut().insert(
					header::CONTENT_TYPE,
					header::HeaderValue::from_static("text/plain"),
				);
				response
			}
		}
	}
}

pub fn run(options: Options, registry: ModelRegistry) -> anyhow::Result<()> {
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_impl(options, registry))
}

async fn run_impl(options: Options, registry: ModelRegistry) -> anyhow::Result<()> {
	let created = registry.slots().filter(|(_, model)| model.is_some()).count();
	tracing::info!(
		"loaded {} model slots, {} with a fitted model",
		registry.len(),
		created
	);
	let context = Context { registry };
	modelview_util::serve::serve(options.host, options.port, context, handle).await?;
	Ok(())
}
