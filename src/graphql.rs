//! GraphQL Query Example
//!
//! Illustrative client-side POST against a `/graphql` endpoint exposing a
//! tree-shaped `readNode` resolver with polymorphic leaf variants. There
//! is no server in this repository; the response is returned as untyped
//! JSON and never validated.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Nested selection over `readNode`: two levels of `Children` containers,
/// leaves resolving to one of `IntValue`, `FloatValue` or `StrValue`.
pub const READ_NODE_QUERY: &str = r#"
{
  readNode(path: ["db1", "tb1"]) {
    id_
    subNode {
      ... on Children {
        nodes {
          id_
          subNode {
            ... on Children {
              nodes {
                id_
                subNode {
                  ... on IntValue {
                    intItem: item
                  }
                }
              }
            }
            ... on IntValue {
              intItem: item
            }
            ... on FloatValue {
              floatItem: item
            }
            ... on StrValue {
              strItem: item
            }
          }
        }
      }
      ... on IntValue {
        intItem: item
      }
      ... on FloatValue {
        floatItem: item
      }
      ... on StrValue {
        strItem: item
      }
    }
  }
}
"#;

fn js_error(err: JsValue) -> String {
    format!("{:?}", err)
}

/// POST the example query and hand back the raw JSON response.
pub async fn fetch_read_node() -> Result<serde_json::Value, String> {
    let body = serde_json::json!({ "query": READ_NODE_QUERY }).to_string();

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init("/graphql", &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    request.headers().set("Accept", "application/json").map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "fetch did not resolve to a Response".to_string())?;

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
