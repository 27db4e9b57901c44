//! OpenAPI paths of the generic resource endpoints, derived from each
//! resource's descriptor.

use fieldforce_core::domain::{
    query::{
        filter::SEARCH_PARAM,
        pagination::{LIMIT_PARAM, PAGE_PARAM},
        sort::{SORT_BY_PARAM, SORT_DIR_PARAM},
    },
    resource::ports::Resource,
};
use utoipa::{
    ToSchema,
    openapi::{
        OpenApi, OpenApiBuilder, RefOr, Required,
        content::ContentBuilder,
        path::{
            HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn,
            PathItem, PathItemBuilder, PathsBuilder,
        },
        request_body::{RequestBody, RequestBodyBuilder},
        response::ResponseBuilder,
        schema::{ComponentsBuilder, ObjectBuilder, Ref, Schema, Type},
    },
};

#[derive(Default)]
pub struct ResourceDoc {
    paths: PathsBuilder,
    components: ComponentsBuilder,
}

fn typed(schema_type: Type) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(schema_type).build(),
    ))
}

fn path_param(name: &str, schema_type: Type, description: &str) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some(description))
        .schema(Some(typed(schema_type)))
        .build()
}

fn query_param(name: &str, description: Option<&str>) -> Parameter {
    ParameterBuilder::new()
        .name(name)
        .parameter_in(ParameterIn::Query)
        .required(Required::False)
        .description(description)
        .schema(Some(typed(Type::String)))
        .build()
}

fn operation(segment: &str, summary: String) -> OperationBuilder {
    OperationBuilder::new().tag(segment).summary(Some(summary))
}

fn respond(builder: OperationBuilder, responses: &[(&str, &str)]) -> Operation {
    responses
        .iter()
        .fold(builder, |builder, (code, description)| {
            builder.response(*code, ResponseBuilder::new().description(*description).build())
        })
        .build()
}

fn json_body(schema_name: &str) -> RequestBody {
    RequestBodyBuilder::new()
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(schema_name)))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

fn path_item(method: HttpMethod, operation: Operation) -> PathItemBuilder {
    PathItemBuilder::new().operation(method, operation)
}

impl ResourceDoc {
    pub fn new() -> Self {
        Self::default()
    }

    fn register<T: ToSchema>(mut self) -> (Self, String) {
        let name = T::name().to_string();
        let mut nested = Vec::new();
        T::schemas(&mut nested);
        self.components = nested
            .into_iter()
            .fold(self.components, |components, (name, schema)| {
                components.schema(name, schema)
            })
            .schema(name.clone(), T::schema());
        (self, name)
    }

    fn list_operation<R: Resource>(segment: &str, summary: String) -> OperationBuilder {
        let descriptor = R::descriptor();
        let mut builder = operation(segment, summary)
            .parameter(query_param(PAGE_PARAM, Some("Page number, 1 based")))
            .parameter(query_param(LIMIT_PARAM, Some("Page size, 1 to 500")))
            .parameter(query_param(SORT_BY_PARAM, Some("Whitelisted sort key")))
            .parameter(query_param(SORT_DIR_PARAM, Some("`asc` or `desc`")));
        if !descriptor.search.is_empty() {
            builder = builder.parameter(query_param(
                SEARCH_PARAM,
                Some("Case-insensitive substring match"),
            ));
        }
        descriptor
            .filter_params()
            .into_iter()
            .fold(builder, |builder, param| {
                builder.parameter(query_param(param, None))
            })
    }

    /// Documents the generic endpoints of `R`. With `writes` unset only the
    /// list, get, update and relation-scoped list are described, for resources
    /// whose create and delete endpoints are documented by their own handlers.
    fn document<R: Resource>(self, segment: &str, writes: bool) -> Self {
        let descriptor = R::descriptor();
        let label = descriptor.label;
        let (doc, update_schema) = self.register::<R::Update>();
        let (mut doc, create_schema) = doc.register::<R::Create>();

        let list = respond(
            Self::list_operation::<R>(segment, format!("List {}", descriptor.name)),
            &[("200", "One page of records")],
        );
        let mut collection = path_item(HttpMethod::Get, list);
        if writes {
            collection = collection.operation(
                HttpMethod::Post,
                respond(
                    operation(segment, format!("Create {label}"))
                        .request_body(Some(json_body(&create_schema))),
                    &[("201", "Record created"), ("400", "Validation failed")],
                ),
            );
        }

        let id = path_param("id", Type::Integer, "Record id");
        let mut record = path_item(
            HttpMethod::Get,
            respond(
                operation(segment, format!("Get {label}")).parameter(id.clone()),
                &[("200", "The record"), ("404", "No record with this id")],
            ),
        )
        .operation(
            HttpMethod::Patch,
            respond(
                operation(segment, format!("Update {label}"))
                    .parameter(id.clone())
                    .request_body(Some(json_body(&update_schema))),
                &[
                    ("200", "Record updated"),
                    ("400", "Validation failed"),
                    ("404", "No record with this id"),
                ],
            ),
        );
        if writes {
            record = record.operation(
                HttpMethod::Delete,
                respond(
                    operation(segment, format!("Delete {label}")).parameter(id),
                    &[("200", "Record deleted"), ("404", "No record with this id")],
                ),
            );
        }

        let relation = path_param(
            "relation",
            Type::String,
            &format!(
                "One of: {}",
                descriptor
                    .relations
                    .iter()
                    .map(|scope| scope.segment)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );
        let relation_id = path_param("relation_id", Type::Integer, "Id of the related row");
        let mut related = path_item(
            HttpMethod::Get,
            respond(
                Self::list_operation::<R>(
                    segment,
                    format!("List {} of one related row", descriptor.name),
                )
                .parameter(relation.clone())
                .parameter(relation_id.clone()),
                &[("200", "One page of records"), ("404", "Unknown relation")],
            ),
        );
        if writes {
            related = related.operation(
                HttpMethod::Delete,
                respond(
                    operation(
                        segment,
                        format!("Delete {} of one related row", descriptor.name),
                    )
                    .parameter(relation)
                    .parameter(relation_id)
                    .parameter(query_param("confirm", Some("Must be `true`"))),
                    &[
                        ("200", "Records deleted"),
                        ("400", "Confirmation missing"),
                        ("404", "Nothing to delete"),
                    ],
                ),
            );
        }

        doc.paths = doc
            .paths
            .path(format!("/{segment}"), collection.build())
            .path(format!("/{segment}/{{id}}"), record.build())
            .path(
                format!("/{segment}/{{relation}}/{{relation_id}}"),
                related.build(),
            );

        if writes {
            doc = doc.bulk::<R>(segment);
        }
        doc
    }

    fn bulk<R: Resource>(mut self, segment: &str) -> Self {
        let descriptor = R::descriptor();
        let date_range = respond(
            operation(segment, format!("Delete {} by date range", descriptor.name))
                .parameter(query_param("startDate", Some("Inclusive, YYYY-MM-DD")))
                .parameter(query_param("endDate", Some("Inclusive, YYYY-MM-DD")))
                .parameter(query_param("confirm", Some("Must be `true`"))),
            &[
                ("200", "Records deleted"),
                ("400", "Invalid range or confirmation missing"),
                ("404", "Nothing to delete"),
            ],
        );
        let all = respond(
            operation(segment, format!("Delete every {} record", descriptor.name)).parameter(
                query_param(
                    "confirm",
                    Some(&format!("Must be `{}`", descriptor.delete_all_token())),
                ),
            ),
            &[
                ("200", "Records deleted"),
                ("400", "Confirmation missing"),
                ("404", "Nothing to delete"),
            ],
        );

        self.paths = self
            .paths
            .path(
                format!("/{segment}/bulk/date-range"),
                PathItem::new(HttpMethod::Delete, date_range),
            )
            .path(
                format!("/{segment}/bulk/all"),
                PathItem::new(HttpMethod::Delete, all),
            );
        self
    }

    /// Every generic endpoint.
    pub fn resource<R: Resource>(self, segment: &str) -> Self {
        self.document::<R>(segment, true)
    }

    /// Reads and partial update only.
    pub fn reads<R: Resource>(self, segment: &str) -> Self {
        self.document::<R>(segment, false)
    }

    pub fn build(self) -> OpenApi {
        OpenApiBuilder::new()
            .paths(self.paths)
            .components(Some(self.components.build()))
            .build()
    }
}
