/// Compact representation of the list and non-null wrappers around a named type.
///
/// List wrappers are stored innermost first: `[[Int!]]!` has an inner required type, an inner
/// nullable list and an outer required list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Wrapping {
    inner_is_required: bool,
    list_count: u8,
    required_lists: u16,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListWrapping {
    RequiredList,
    NullableList,
}

const MAX_LIST_WRAPPINGS: u8 = 16;

impl Wrapping {
    pub fn new(inner_is_required: bool) -> Self {
        Self {
            inner_is_required,
            ..Default::default()
        }
    }

    pub fn nullable() -> Self {
        Self::new(false)
    }

    pub fn required() -> Self {
        Self::new(true)
    }

    /// Wraps the current type in an additional outermost list.
    pub fn wrapped_by(mut self, list_wrapping: ListWrapping) -> Self {
        debug_assert!(self.list_count < MAX_LIST_WRAPPINGS);
        if list_wrapping == ListWrapping::RequiredList {
            self.required_lists |= 1 << self.list_count;
        }
        self.list_count += 1;
        self
    }

    pub fn is_required(&self) -> bool {
        match self.list_count {
            0 => self.inner_is_required,
            n => self.required_lists & (1 << (n - 1)) != 0,
        }
    }

    pub fn inner_is_required(&self) -> bool {
        self.inner_is_required
    }

    pub fn is_list(&self) -> bool {
        self.list_count > 0
    }

    /// List wrappers from the innermost to the outermost.
    pub fn list_wrappings(&self) -> impl ExactSizeIterator<Item = ListWrapping> + '_ {
        (0..self.list_count).map(|i| {
            if self.required_lists & (1 << i) != 0 {
                ListWrapping::RequiredList
            } else {
                ListWrapping::NullableList
            }
        })
    }

    pub fn pop_outermost_list_wrapping(&mut self) -> Option<ListWrapping> {
        let i = self.list_count.checked_sub(1)?;
        let required = self.required_lists & (1 << i) != 0;
        self.required_lists &= !(1 << i);
        self.list_count = i;
        Some(if required {
            ListWrapping::RequiredList
        } else {
            ListWrapping::NullableList
        })
    }

    /// Writes `name` with its wrappers in GraphQL notation.
    pub(crate) fn format(&self, name: &str) -> String {
        let mut s = String::with_capacity(name.len() + 2 + 3 * self.list_count as usize);
        for _ in 0..self.list_count {
            s.push('[');
        }
        s.push_str(name);
        if self.inner_is_required {
            s.push('!');
        }
        for wrapping in self.list_wrappings() {
            s.push(']');
            if wrapping == ListWrapping::RequiredList {
                s.push('!');
            }
        }
        s
    }
}

/// Parses a type reference such as `[CatInput!]!` into its named type and wrapping.
pub(crate) fn parse_type_reference(reference: &str) -> Option<(&str, Wrapping)> {
    let reference = reference.trim();
    let (reference, required) = match reference.strip_suffix('!') {
        Some(rest) => (rest.trim_end(), true),
        None => (reference, false),
    };

    if let Some(inner) = reference.strip_prefix('[') {
        let (name, wrapping) = parse_type_reference(inner.strip_suffix(']')?)?;
        if wrapping.list_count >= MAX_LIST_WRAPPINGS {
            return None;
        }
        let list_wrapping = if required {
            ListWrapping::RequiredList
        } else {
            ListWrapping::NullableList
        };
        return Some((name, wrapping.wrapped_by(list_wrapping)));
    }

    let mut chars = reference.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    Some((reference, Wrapping::new(required)))
}
