mod content_service_impl;

pub use content_service_impl::ContentServiceImpl;
