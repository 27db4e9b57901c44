use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait,
};
use serde::{Serialize, de::DeserializeOwned};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{
    bulk::value_objects::BulkScope,
    common::entities::app_errors::CoreError,
    query::{
        ListQuery,
        descriptor::ResourceDescriptor,
        value_objects::{Predicate, RawQuery},
    },
    resource::value_objects::{ListPage, RelationFilter},
};

pub type ModelOf<R> = <R as Resource>::Model;
pub type ColumnOf<R> = <<R as Resource>::Entity as EntityTrait>::Column;
pub type ActiveModelOf<R> = <R as Resource>::ActiveModel;

/// A table exposed through the generic list, CRUD and bulk-delete endpoints.
///
/// Implementors are zero-sized markers tying a sea-orm entity to its
/// [`ResourceDescriptor`] and its create/update payloads.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model, ActiveModel = Self::ActiveModel, Column: Send + Sync>
        + Send
        + Sync;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;
    type Create: DeserializeOwned + Validate + ToSchema + Send + 'static;
    type Update: DeserializeOwned + Validate + ToSchema + Send + 'static;

    /// `(field, wire key)` pairs for payload fields serde renames to something
    /// other than the camelCase field name.
    const RENAMED_FIELDS: &'static [(&'static str, &'static str)] = &[];

    fn descriptor() -> &'static ResourceDescriptor<ColumnOf<Self>>;

    fn new_active_model(input: Self::Create) -> ActiveModelOf<Self>;

    /// Copies the supplied fields onto `model`; absent fields stay untouched.
    fn apply_changes(model: &mut ActiveModelOf<Self>, input: Self::Update);
}

pub trait ResourceService: Send + Sync {
    fn list<R: Resource>(
        &self,
        relation: Option<RelationFilter>,
        raw: RawQuery,
    ) -> impl Future<Output = Result<ListPage<ModelOf<R>>, CoreError>> + Send;

    fn get<R: Resource>(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<ModelOf<R>, CoreError>> + Send;

    fn create<R: Resource>(
        &self,
        input: R::Create,
    ) -> impl Future<Output = Result<ModelOf<R>, CoreError>> + Send;

    fn update<R: Resource>(
        &self,
        id: i32,
        input: R::Update,
    ) -> impl Future<Output = Result<ModelOf<R>, CoreError>> + Send;

    fn delete<R: Resource>(&self, id: i32) -> impl Future<Output = Result<i32, CoreError>> + Send;

    /// Guarded deletion of every row in `scope`; returns the deleted count.
    fn bulk_delete<R: Resource>(
        &self,
        scope: BulkScope,
        confirm: Option<String>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait ResourceRepository: Send + Sync {
    fn find_page<R: Resource>(
        &self,
        query: ListQuery<ColumnOf<R>>,
    ) -> impl Future<Output = Result<Vec<ModelOf<R>>, CoreError>> + Send;

    fn find_by_id<R: Resource>(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<ModelOf<R>>, CoreError>> + Send;

    fn insert<R: Resource>(
        &self,
        input: R::Create,
    ) -> impl Future<Output = Result<ModelOf<R>, CoreError>> + Send;

    /// `None` when no row has this id.
    fn update<R: Resource>(
        &self,
        id: i32,
        input: R::Update,
    ) -> impl Future<Output = Result<Option<ModelOf<R>>, CoreError>> + Send;

    fn delete_by_id<R: Resource>(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Reads the matching ids and deletes exactly those rows in one
    /// transaction. Nothing is deleted when no row matches.
    fn delete_matching<R: Resource>(
        &self,
        predicate: Option<Predicate<ColumnOf<R>>>,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
