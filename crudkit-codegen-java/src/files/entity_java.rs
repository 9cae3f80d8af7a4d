use crudkit_codegen::PreparedModule;
use crudkit_core::{GeneratedFile, Layer, ModuleLayout, table_name, to_snake_case};
use crudkit_ir::{ProcessedClass, ProcessedField, RelationshipKind};

use super::{accessors, declared_method, method_imports};
use crate::{
    JavaFile,
    ast::{Annotation, DeclKind, Field, Method, TypeDecl},
    shape::{entity_type, type_imports},
};

/// The JPA entity of a processed class.
pub struct EntityJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> EntityJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }

    fn persistence(&self, name: &str) -> String {
        format!("{}.{}", self.module.options.persistence.namespace(), name)
    }

    fn target_table(&self, field: &ProcessedField) -> String {
        self.module
            .classes
            .get(field.target())
            .map(|c| c.table_name.clone())
            .unwrap_or_else(|| table_name(field.target()))
    }

    /// Annotations for one field, plus the imports they need.
    fn field_annotations(&self, field: &ProcessedField) -> (Vec<Annotation>, Vec<String>) {
        if field.identifier {
            // IDENTITY columns only exist for numeric keys
            if !matches!(field.ty.as_str(), "Long" | "Integer") {
                return (vec![Annotation::new("Id")], vec![self.persistence("Id")]);
            }
            return (
                vec![
                    Annotation::new("Id"),
                    Annotation::new("GeneratedValue").arg("strategy = GenerationType.IDENTITY"),
                ],
                vec![
                    self.persistence("Id"),
                    self.persistence("GeneratedValue"),
                    self.persistence("GenerationType"),
                ],
            );
        }

        let Some(kind) = field.relationship_kind() else {
            let mut column = Annotation::new("Column");
            let mut constrained = false;
            if field.required {
                column = column.arg("nullable = false");
                constrained = true;
            }
            if field.unique {
                column = column.arg("unique = true");
                constrained = true;
            }
            return if constrained {
                (vec![column], vec![self.persistence("Column")])
            } else {
                (Vec::new(), Vec::new())
            };
        };

        let owner_table = &self.class.table_name;
        match kind {
            RelationshipKind::ManyToOne | RelationshipKind::OneToOne => {
                let mut join = Annotation::new("JoinColumn")
                    .named_string("name", &format!("{}_id", to_snake_case(&field.name)));
                if field.required {
                    join = join.arg("nullable = false");
                }
                if field.unique {
                    join = join.arg("unique = true");
                }
                let marker = kind.as_str();
                (
                    vec![Annotation::new(marker), join],
                    vec![self.persistence(marker), self.persistence("JoinColumn")],
                )
            }
            RelationshipKind::OneToMany => (
                vec![
                    Annotation::new("OneToMany"),
                    Annotation::new("JoinColumn")
                        .named_string("name", &format!("{}_id", owner_table)),
                ],
                vec![self.persistence("OneToMany"), self.persistence("JoinColumn")],
            ),
            RelationshipKind::ManyToMany => {
                let target_table = self.target_table(field);
                let inverse = if &target_table == owner_table {
                    format!("{}_id", to_snake_case(&field.name))
                } else {
                    format!("{}_id", target_table)
                };
                let join_table = Annotation::new("JoinTable")
                    .named_string("name", &format!("{}_{}", owner_table, target_table))
                    .arg(format!(
                        "joinColumns = @JoinColumn(name = \"{}_id\")",
                        owner_table
                    ))
                    .arg(format!(
                        "inverseJoinColumns = @JoinColumn(name = \"{}\")",
                        inverse
                    ));
                (
                    vec![Annotation::new("ManyToMany"), join_table],
                    vec![
                        self.persistence("ManyToMany"),
                        self.persistence("JoinTable"),
                        self.persistence("JoinColumn"),
                    ],
                )
            }
        }
    }
}

impl GeneratedFile for EntityJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.main_java(Layer::Entity, &self.class.entity_name)
    }

    fn render(&self) -> String {
        let class = self.class;
        let lombok = self.module.options.lombok;

        let mut imports = vec![self.persistence("Entity"), self.persistence("Table")];
        let mut decl = TypeDecl::class(&class.entity_name)
            .annotation(Annotation::new("Entity"))
            .annotation(Annotation::new("Table").named_string("name", &class.table_name));

        if lombok {
            for marker in ["Getter", "Setter", "NoArgsConstructor"] {
                decl = decl.annotation(Annotation::new(marker));
                imports.push(format!("lombok.{}", marker));
            }
        }

        for field in class.fields() {
            let ty = entity_type(field);
            let (annotations, annotation_imports) = self.field_annotations(field);
            imports.extend(annotation_imports);
            imports.extend(type_imports(&ty, self.module));

            let mut member = Field::new(&field.name, &ty).annotations(annotations);
            if field.is_collection() {
                member = member.initializer("new ArrayList<>()");
                imports.push("java.util.ArrayList".into());
            }
            decl = decl.member(&member);
        }

        if !lombok {
            decl = decl.member(&Method::constructor(&class.entity_name));
            for field in class.fields() {
                decl = decl.members(&accessors(&field.name, &entity_type(field)));
            }
        }

        for method in &class.methods {
            imports.extend(method_imports(method, self.module));
            decl = decl.member(&declared_method(method, DeclKind::Class));
        }

        JavaFile::new(self.module.layout().package(Layer::Entity))
            .imports(imports)
            .add(&decl)
            .render()
    }
}
