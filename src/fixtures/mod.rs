//! Engine export fixtures shared by unit tests.

/// One function `f` returning a set of three objects, with two arguments whose
/// sets hold one and zero objects.
pub const SINGLE_FUNCTION: &str = r#"{
  "module": "foo.ll",
  "functions": [
    {"signature": "Function: f", "return_node": 3, "args": [4, 5]}
  ],
  "nodes": {
    "3": "RetValPN ID: 3 f",
    "4": "i32* %x { \"ln\": 2, \"file\": \"/a/b.c\" }",
    "5": "i8* %buf",
    "7": "ObjVar ID: 7 (heap)",
    "8": "ObjVar ID: 8 (stack)",
    "9": "ObjVar ID: 9 (global)"
  },
  "points_to": {
    "3": [7, 8, 9],
    "4": [7]
  },
  "call_graph": {
    "nodes": [{"id": 1, "function": "f"}],
    "edges": []
  }
}"#;

/// `main` (no registered arguments) calling `f`.
pub const MAIN_CALLS_F: &str = r#"{
  "module": "main.ll",
  "functions": [
    {"signature": "Function: main", "return_node": 10},
    {"signature": "Function: f", "return_node": 3, "args": [4, 5]}
  ],
  "nodes": {
    "3": "RetValPN ID: 3 f",
    "4": "i32* %x { \"ln\": 2, \"file\": \"/a/b.c\" }",
    "5": "i8* %buf",
    "7": "ObjVar ID: 7 (heap)",
    "8": "ObjVar ID: 8 (stack)",
    "9": "ObjVar ID: 9 (global)",
    "10": "RetValPN ID: 10 main"
  },
  "points_to": {
    "3": [7, 8, 9],
    "4": [7],
    "10": []
  },
  "call_graph": {
    "nodes": [{"id": 0, "function": "main"}, {"id": 1, "function": "f"}],
    "edges": [{"caller": 0, "callee": 1, "call_site": "call void @f()"}]
  }
}"#;
