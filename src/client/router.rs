use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{AddServer, Login, NotFound, ServerList, SetupServer, Uptime};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:next")]
    Login { next: String },

    #[layout(RequiresLoggedIn)]
    #[layout(Layout)]
        #[route("/")]
        ServerList {},

        #[route("/add")]
        AddServer {},

        #[route("/setup")]
        SetupServer {},

        #[route("/uptime")]
        Uptime {},
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
