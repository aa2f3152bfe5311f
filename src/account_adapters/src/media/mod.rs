pub mod cloudinary_media_host;
pub mod mock_media_host;

pub use cloudinary_media_host::CloudinaryMediaHost;
pub use mock_media_host::MockMediaHost;
