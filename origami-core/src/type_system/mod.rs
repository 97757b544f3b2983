mod info;

pub use info::TypeInfo;
