//! Request middleware.

pub mod path_params;

pub use path_params::{
    create_config, new_middleware, MiddlewareError, PathParamHeaders, PathParamHeadersLayer,
    PathParamHeadersService,
};
