mod account;
mod helpers;
mod profile_images;
mod register;
mod session;
