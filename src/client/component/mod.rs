pub mod ip_tags_input;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod server_form;
pub mod toast;

pub use ip_tags_input::IpTagsInput;
pub use layout::Layout;
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
pub use toast::{use_toasts, ToastContainer, ToastContext};
