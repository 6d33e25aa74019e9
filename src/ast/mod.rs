/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node trait, statement/expression enums and the Program root
/// - expressions: Identifier and number expressions
/// - statements: Constant declarations
pub mod ast;
pub mod expressions;
pub mod statements;
