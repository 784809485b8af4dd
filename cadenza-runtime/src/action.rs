use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_SHELL_SCRIPT: &str = "/path/to/script.sh";
const DEFAULT_PYTHON_FILE: &str = "/path/to/script.py";
const DEFAULT_PYTHON_INLINE: &str = "print(\\\"Hello World\\\")";
const DEFAULT_NODE_FILE: &str = "/path/to/script.js";
const DEFAULT_NODE_INLINE: &str = "console.log(\\\"Hello World\\\")";
const DEFAULT_HTTP_URL: &str = "https://example.com";
const DEFAULT_HTTP_HOST: &str = "example.com";
const DEFAULT_HTTP_METHOD: &str = "GET";
const DEFAULT_WEBHOOK_URL: &str = "https://hooks.example.com/webhook";
const DEFAULT_WEBHOOK_HOST: &str = "hooks.example.com";
const DEFAULT_WEBHOOK_PAYLOAD: &str = "{\"status\":\"ok\"}";
const DEFAULT_DOCKER_IMAGE: &str = "alpine:latest";
const DEFAULT_DOCKER_ARGS: &str = "echo \\\"Hello from Docker\\\"";
const DEFAULT_CUSTOM_COMMAND: &str = "echo \\\"Custom command\\\"";

/// Discriminant for the seven action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Shell,
    Python,
    Node,
    Http,
    Webhook,
    Docker,
    Custom,
}

impl ActionKind {
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Shell,
        ActionKind::Python,
        ActionKind::Node,
        ActionKind::Http,
        ActionKind::Webhook,
        ActionKind::Docker,
        ActionKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Shell => "shell",
            ActionKind::Python => "python",
            ActionKind::Node => "node",
            ActionKind::Http => "http",
            ActionKind::Webhook => "webhook",
            ActionKind::Docker => "docker",
            ActionKind::Custom => "custom",
        }
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shell" => Ok(ActionKind::Shell),
            "python" => Ok(ActionKind::Python),
            "node" | "nodejs" => Ok(ActionKind::Node),
            "http" => Ok(ActionKind::Http),
            "webhook" => Ok(ActionKind::Webhook),
            "docker" => Ok(ActionKind::Docker),
            "custom" => Ok(ActionKind::Custom),
            _ => Err(format!("Invalid action kind: {}", s)),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// By-name selector for an action parameter, for input surfaces that mutate
/// the active action one field at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionParam {
    ScriptPath,
    ScriptFile,
    ScriptContent,
    Url,
    Method,
    Headers,
    Body,
    WebhookUrl,
    Payload,
    Image,
    ContainerArgs,
    Command,
}

impl ActionParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionParam::ScriptPath => "script_path",
            ActionParam::ScriptFile => "script_file",
            ActionParam::ScriptContent => "script_content",
            ActionParam::Url => "url",
            ActionParam::Method => "method",
            ActionParam::Headers => "headers",
            ActionParam::Body => "body",
            ActionParam::WebhookUrl => "webhook_url",
            ActionParam::Payload => "payload",
            ActionParam::Image => "image",
            ActionParam::ContainerArgs => "container_args",
            ActionParam::Command => "command",
        }
    }
}

impl std::str::FromStr for ActionParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "script_path" | "scriptpath" => Ok(ActionParam::ScriptPath),
            "script_file" | "scriptfile" => Ok(ActionParam::ScriptFile),
            "script_content" | "scriptcontent" => Ok(ActionParam::ScriptContent),
            "url" => Ok(ActionParam::Url),
            "method" => Ok(ActionParam::Method),
            "headers" => Ok(ActionParam::Headers),
            "body" => Ok(ActionParam::Body),
            "webhook_url" | "webhookurl" => Ok(ActionParam::WebhookUrl),
            "payload" => Ok(ActionParam::Payload),
            "image" => Ok(ActionParam::Image),
            "container_args" | "containerargs" => Ok(ActionParam::ContainerArgs),
            "command" => Ok(ActionParam::Command),
            _ => Err(format!("Invalid action parameter: {}", s)),
        }
    }
}

impl std::fmt::Display for ActionParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a crontab entry should execute, independent of when
///
/// Each variant carries only the parameters meaningful to its kind. An unset
/// (or empty) parameter falls back to the kind's fixed default when the
/// invocation fragment or the English phrase is rendered. Switching kinds
/// always goes through [`Action::default_for`], so parameters can never leak
/// from one kind into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    Shell {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script_path: Option<String>,
    },
    Python {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script_file: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script_content: Option<String>,
    },
    Node {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script_file: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        script_content: Option<String>,
    },
    Http {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        headers: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    Webhook {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        webhook_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<String>,
    },
    Docker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        container_args: Option<String>,
    },
    Custom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        command: Option<String>,
    },
}

impl Default for Action {
    fn default() -> Self {
        Action::default_for(ActionKind::Shell)
    }
}

impl Action {
    /// The canonical default descriptor for a kind.
    /// Used on every kind switch so no stale parameters survive.
    pub fn default_for(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Shell => Action::Shell {
                script_path: Some(DEFAULT_SHELL_SCRIPT.to_string()),
            },
            ActionKind::Python => Action::Python {
                script_file: Some(DEFAULT_PYTHON_FILE.to_string()),
                script_content: None,
            },
            ActionKind::Node => Action::Node {
                script_file: Some(DEFAULT_NODE_FILE.to_string()),
                script_content: None,
            },
            ActionKind::Http => Action::Http {
                url: Some(DEFAULT_HTTP_URL.to_string()),
                method: Some(DEFAULT_HTTP_METHOD.to_string()),
                headers: None,
                body: None,
            },
            ActionKind::Webhook => Action::Webhook {
                webhook_url: Some(DEFAULT_WEBHOOK_URL.to_string()),
                payload: Some(DEFAULT_WEBHOOK_PAYLOAD.to_string()),
            },
            ActionKind::Docker => Action::Docker {
                image: Some(DEFAULT_DOCKER_IMAGE.to_string()),
                container_args: Some(DEFAULT_DOCKER_ARGS.to_string()),
            },
            ActionKind::Custom => Action::Custom {
                command: Some(DEFAULT_CUSTOM_COMMAND.to_string()),
            },
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Shell { .. } => ActionKind::Shell,
            Action::Python { .. } => ActionKind::Python,
            Action::Node { .. } => ActionKind::Node,
            Action::Http { .. } => ActionKind::Http,
            Action::Webhook { .. } => ActionKind::Webhook,
            Action::Docker { .. } => ActionKind::Docker,
            Action::Custom { .. } => ActionKind::Custom,
        }
    }

    /// The invocation fragment appended after the schedule expression.
    ///
    /// Every unset parameter substitutes its kind's fixed default, so the
    /// fragment is never empty. For Python and Node a script file wins over
    /// inline content; inline content is only the fallback.
    pub fn fragment(&self) -> String {
        match self {
            Action::Shell { script_path } => value_or(script_path, DEFAULT_SHELL_SCRIPT).to_string(),
            Action::Python {
                script_file,
                script_content,
            } => match set_value(script_file) {
                Some(file) => format!("python {}", file),
                None => format!(
                    "python -c \"{}\"",
                    value_or(script_content, DEFAULT_PYTHON_INLINE)
                ),
            },
            Action::Node {
                script_file,
                script_content,
            } => match set_value(script_file) {
                Some(file) => format!("node {}", file),
                None => format!(
                    "node -e \"{}\"",
                    value_or(script_content, DEFAULT_NODE_INLINE)
                ),
            },
            Action::Http {
                url,
                method,
                headers,
                body,
            } => {
                let method = value_or(method, DEFAULT_HTTP_METHOD);
                let mut cmd = format!("curl -X {} {}", method, value_or(url, DEFAULT_HTTP_URL));
                if let Some(headers) = set_value(headers) {
                    cmd.push_str(&format!(" -H \"{}\"", headers));
                }
                if let Some(body) = set_value(body) {
                    if method != "GET" {
                        cmd.push_str(&format!(" -d '{}'", body));
                    }
                }
                cmd
            }
            Action::Webhook {
                webhook_url,
                payload,
            } => format!(
                "curl -X POST {} -H \"Content-Type: application/json\" -d '{}'",
                value_or(webhook_url, DEFAULT_WEBHOOK_URL),
                value_or(payload, DEFAULT_WEBHOOK_PAYLOAD)
            ),
            Action::Docker {
                image,
                container_args,
            } => format!(
                "docker run --rm {} {}",
                value_or(image, DEFAULT_DOCKER_IMAGE),
                value_or(container_args, DEFAULT_DOCKER_ARGS)
            ),
            Action::Custom { command } => value_or(command, DEFAULT_CUSTOM_COMMAND).to_string(),
        }
    }

    /// English sentence for this action with the (already lower-cased) time
    /// phrase appended, e.g. "Send GET request to api.example.com every minute"
    pub fn describe(&self, time_phrase: &str) -> String {
        match self {
            Action::Shell { .. } => format!("Run shell script {}", time_phrase),
            Action::Python { .. } => format!("Execute Python script {}", time_phrase),
            Action::Node { .. } => format!("Execute Node.js script {}", time_phrase),
            Action::Http { url, method, .. } => format!(
                "Send {} request to {} {}",
                value_or(method, DEFAULT_HTTP_METHOD),
                host_of(url, DEFAULT_HTTP_HOST),
                time_phrase
            ),
            Action::Webhook { webhook_url, .. } => format!(
                "Trigger webhook to {} {}",
                host_of(webhook_url, DEFAULT_WEBHOOK_HOST),
                time_phrase
            ),
            Action::Docker { image, .. } => format!(
                "Run Docker container ({}) {}",
                value_or(image, DEFAULT_DOCKER_IMAGE),
                time_phrase
            ),
            Action::Custom { .. } => format!("Execute custom command {}", time_phrase),
        }
    }

    /// Set a parameter on the active variant.
    /// Returns false (leaving the action untouched) when the parameter does
    /// not belong to this kind.
    pub fn set(&mut self, param: ActionParam, value: impl Into<String>) -> bool {
        let value = Some(value.into());
        match (self, param) {
            (Action::Shell { script_path }, ActionParam::ScriptPath) => *script_path = value,
            (Action::Python { script_file, .. }, ActionParam::ScriptFile) => *script_file = value,
            (Action::Python { script_content, .. }, ActionParam::ScriptContent) => {
                *script_content = value
            }
            (Action::Node { script_file, .. }, ActionParam::ScriptFile) => *script_file = value,
            (Action::Node { script_content, .. }, ActionParam::ScriptContent) => {
                *script_content = value
            }
            (Action::Http { url, .. }, ActionParam::Url) => *url = value,
            (Action::Http { method, .. }, ActionParam::Method) => *method = value,
            (Action::Http { headers, .. }, ActionParam::Headers) => *headers = value,
            (Action::Http { body, .. }, ActionParam::Body) => *body = value,
            (Action::Webhook { webhook_url, .. }, ActionParam::WebhookUrl) => *webhook_url = value,
            (Action::Webhook { payload, .. }, ActionParam::Payload) => *payload = value,
            (Action::Docker { image, .. }, ActionParam::Image) => *image = value,
            (Action::Docker { container_args, .. }, ActionParam::ContainerArgs) => {
                *container_args = value
            }
            (Action::Custom { command }, ActionParam::Command) => *command = value,
            _ => return false,
        }
        true
    }
}

/// A parameter counts as set only when it is Some and non-empty
fn set_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn value_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    set_value(value).unwrap_or(default)
}

/// Host portion of a configured URL for English phrasing.
/// An absent or unparseable URL is recoverable: fall back to the kind's
/// default host rather than failing the translation.
fn host_of(url: &Option<String>, fallback: &str) -> String {
    set_value(url)
        .and_then(|u| Url::parse(u).ok())
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| fallback.to_string())
}
