use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for styling
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Predefined icon names
#[allow(dead_code)]
pub mod icons {
    pub const TARGET: &str = "target";
    pub const ZAP: &str = "zap";
    pub const USERS: &str = "users";
    pub const USER: &str = "user";
    pub const TROPHY: &str = "trophy";
    pub const SHIELD: &str = "shield";
    pub const CALENDAR: &str = "calendar";
    pub const CLOCK: &str = "clock";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const SEND: &str = "send";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const STAR: &str = "star";
    pub const CAKE: &str = "cake";
    pub const GIFT: &str = "gift";
    pub const CAMERA: &str = "camera";
    pub const SPARKLES: &str = "sparkles";
    pub const GAMEPAD: &str = "gamepad";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const LOADER: &str = "loader";
    pub const FACEBOOK: &str = "facebook";
    pub const INSTAGRAM: &str = "instagram";
    pub const TWITTER: &str = "twitter";
    pub const YOUTUBE: &str = "youtube";
}
