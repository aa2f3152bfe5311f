pub mod change_password;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod refresh_access;
pub mod register;
pub mod session;
pub mod update_account;
pub mod update_profile_image;
