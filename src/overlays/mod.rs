mod help;
mod toast;
mod util;

pub use help::render_help_overlay;
pub use toast::render_toast;
