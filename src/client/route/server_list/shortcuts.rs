use serde::Deserialize;

/// A keydown forwarded from the document listener.
#[derive(Deserialize, Debug)]
pub struct KeyPress {
    pub key: String,
    pub modifier: bool,
    pub typing: bool,
}

/// Installs a single document keydown listener that forwards key presses over
/// `dioxus.send`. Select-all and Delete are swallowed outside text fields.
pub const KEY_LISTENER_JS: &str = r#"
if (window.__serverListKeys) {
    document.removeEventListener('keydown', window.__serverListKeys);
}
window.__serverListKeys = (e) => {
    const el = document.activeElement;
    const typing = !!el && (
        el.tagName === 'TEXTAREA' ||
        el.tagName === 'SELECT' ||
        el.isContentEditable ||
        (el.tagName === 'INPUT' && !['checkbox', 'radio', 'button', 'submit'].includes(el.type))
    );
    const modifier = e.ctrlKey || e.metaKey;
    if (!typing && ((modifier && e.key.toLowerCase() === 'a') || e.key === 'Delete')) {
        e.preventDefault();
    }
    dioxus.send({ key: e.key, modifier, typing });
};
document.addEventListener('keydown', window.__serverListKeys);
"#;

pub const REMOVE_KEY_LISTENER_JS: &str = r#"
if (window.__serverListKeys) {
    document.removeEventListener('keydown', window.__serverListKeys);
    window.__serverListKeys = null;
}
"#;

pub const BLUR_ACTIVE_JS: &str = "document.activeElement?.blur();";
