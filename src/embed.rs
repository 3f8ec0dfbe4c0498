//! Config embedding.
//!
//! The browser binding reads its configuration from a JSON `<script>`
//! element in the page:
//!
//! ```html
//! <script type="application/json" id="grete-ui-config">{"gallery":{...}}</script>
//! ```
//!
//! [`config_script`] renders that element with [maud](https://maud.lambda.xyz/).
//! The JSON is inserted pre-escaped so the browser sees it verbatim; the
//! only sequence that could end the element early, `</`, is written as
//! `<\/`, which JSON parsers read back as the same string.

use crate::config::{BehaviorConfig, ConfigError};
use maud::{Markup, PreEscaped, html};

/// Id of the config element the browser binding looks up.
pub const CONFIG_ELEMENT_ID: &str = "grete-ui-config";

/// Serialize the config to JSON safe for inline `<script>` content.
pub fn config_json(config: &BehaviorConfig) -> Result<String, ConfigError> {
    let json = serde_json::to_string(config)?;
    Ok(json.replace("</", "<\\/"))
}

/// Render the `<script type="application/json">` element for the page.
pub fn config_script(config: &BehaviorConfig) -> Result<Markup, ConfigError> {
    let json = config_json(config)?;
    Ok(html! {
        script type="application/json" id=(CONFIG_ELEMENT_ID) { (PreEscaped(json)) }
    })
}
