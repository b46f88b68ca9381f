//! Per-function records produced by the report builder.

/// Metadata recovered from an argument's textual rendering.
/// Any field may be empty when extraction misses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMetadata {
    pub ty: String,
    pub name: String,
    pub file: String,
}

/// One formal argument. Builders populate only the fields their report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentRecord {
    pub index: usize,
    pub points_to_set_size: Option<usize>,
    pub members: Option<Vec<String>>,
    pub metadata: Option<ArgumentMetadata>,
}

impl ArgumentRecord {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            points_to_set_size: None,
            members: None,
            metadata: None,
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.points_to_set_size = Some(size);
        self
    }

    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = Some(members);
        self
    }

    pub fn with_metadata(mut self, metadata: ArgumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Summary of one analyzed function. `arguments` keeps declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    pub name: String,
    pub return_set_size: usize,
    pub return_members: Option<Vec<String>>,
    pub arguments: Vec<ArgumentRecord>,
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>, return_set_size: usize) -> Self {
        Self {
            name: name.into(),
            return_set_size,
            return_members: None,
            arguments: Vec::new(),
        }
    }
}

/// Records in the engine's function iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    pub functions: Vec<FunctionRecord>,
}

impl ReportDocument {
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
