pub mod change_password;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod profile_images;
pub mod refresh_token;
pub mod register;
pub mod update_account;

pub use change_password::change_password;
pub use current_user::current_user;
pub use login::login;
pub use logout::logout;
pub use profile_images::{update_avatar, update_cover_image};
pub use refresh_token::refresh_token;
pub use register::register;
pub use update_account::update_account;
