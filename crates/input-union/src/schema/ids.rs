use std::num::NonZero;

use super::{
    EnumDefinitionRecord, Graph, InputObjectDefinitionRecord, InputUnionDefinitionRecord, ScalarDefinitionRecord,
};

macro_rules! id_newtypes {
    ($($container:ident.$field:ident[$name:ident] => $output:ident,)*) => {
        $(
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(NonZero<u32>);

            impl From<usize> for $name {
                fn from(index: usize) -> Self {
                    Self(
                        u32::try_from(index + 1)
                            .ok()
                            .and_then(NonZero::new)
                            .expect("too many indices"),
                    )
                }
            }

            impl From<$name> for usize {
                fn from(id: $name) -> Self {
                    (id.0.get() - 1) as usize
                }
            }

            impl std::ops::Index<$name> for $container {
                type Output = $output;

                fn index(&self, id: $name) -> &Self::Output {
                    &self.$field[usize::from(id)]
                }
            }
        )*
    };
}

id_newtypes! {
    Graph.scalar_definitions[ScalarDefinitionId] => ScalarDefinitionRecord,
    Graph.enum_definitions[EnumDefinitionId] => EnumDefinitionRecord,
    Graph.input_object_definitions[InputObjectDefinitionId] => InputObjectDefinitionRecord,
    Graph.input_union_definitions[InputUnionDefinitionId] => InputUnionDefinitionRecord,
}
