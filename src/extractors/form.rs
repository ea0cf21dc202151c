//! Extract write-request fields from a url-encoded, multipart or flat JSON body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, HeaderValue},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Typed form fields. A request without a content type is read as url-encoded.
#[derive(Clone, Debug)]
pub struct FormFields<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormFields<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase());

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("multipart/form-data") => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                let mut fields = Map::new();
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?
                {
                    if field.file_name().is_some() {
                        continue;
                    }
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(e.body_text()))?;
                    fields.insert(name, Value::String(text));
                }
                from_fields(fields)
            }
            Some(ct) if ct.starts_with("application/json") => {
                let Json(body) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                let Value::Object(obj) = body else {
                    return Err(AppError::Validation("body must be a JSON object".into()));
                };
                let mut fields = Map::new();
                for (key, value) in obj {
                    let text = match value {
                        Value::Null => continue,
                        Value::String(s) => s,
                        Value::Number(n) => n.to_string(),
                        Value::Bool(b) => b.to_string(),
                        Value::Array(_) | Value::Object(_) => {
                            return Err(AppError::Validation(format!(
                                "field '{}' must be a scalar",
                                key
                            )))
                        }
                    };
                    fields.insert(key, Value::String(text));
                }
                from_fields(fields)
            }
            _ => {
                if content_type.is_none() {
                    req.headers_mut().insert(
                        CONTENT_TYPE,
                        HeaderValue::from_static("application/x-www-form-urlencoded"),
                    );
                }
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                Ok(FormFields(value))
            }
        }
    }
}

fn from_fields<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<FormFields<T>, AppError> {
    serde_json::from_value(Value::Object(fields))
        .map(FormFields)
        .map_err(|e| AppError::Validation(e.to_string()))
}
