#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod error;
mod form;
mod gateway;
mod grid;
mod presentation;

pub use app::{AutoGrid, DeleteOutcome, MasterDetailController, SaveOutcome, UiOptions};
pub use domain::{
    CollectionDisplay, Entity, EntitySchema, FieldSpec, SemanticType, classify, humanize_label,
    read_collection, read_field,
};
pub use error::{
    FieldAccessError, FieldViolation, IntrospectionError, PersistenceError, ValidationErrors,
};
pub use form::{
    Binder, CollectionFieldAdapter, CollectionView, ItemLabelGenerator, WidgetFactory, WidgetKind,
};
pub use gateway::{DataSourceGateway, InMemoryGateway};
pub use grid::{Column, build_columns, order_columns};

pub mod prelude {
    pub use super::{
        AutoGrid, CollectionDisplay, DataSourceGateway, EntitySchema, InMemoryGateway, UiOptions,
    };
}
