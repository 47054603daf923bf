//! Build context for IR to AST conversion.

use vhdl_ir::{Field, IrProvider, NodeHandle, NodeKind};

use crate::error::{ContractViolation, DomError, DomErrorKind, DomResult, NameDefect};
use crate::options::BuildOptions;

use super::chain::{ChainError, ChainWalker, WalkError};
use super::FromIr;

/// Context for building the AST from one provider.
///
/// The ancestor stack is the only state carried through a build; it is
/// pushed and popped by [`DomCtx::descend`].
pub struct DomCtx<'p> {
    provider: &'p dyn IrProvider,
    options: BuildOptions,
    ancestors: Vec<NodeHandle>,
}

impl<'p> DomCtx<'p> {
    pub fn new(provider: &'p dyn IrProvider, options: BuildOptions) -> Self {
        Self {
            provider,
            options,
            ancestors: Vec::new(),
        }
    }

    pub fn provider(&self) -> &'p dyn IrProvider {
        self.provider
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn kind_of(&self, node: NodeHandle) -> NodeKind {
        self.provider.kind_of(node)
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// Error located at `node`, with its kind and position filled in.
    pub fn error(&self, node: NodeHandle, kind: DomErrorKind) -> DomError {
        DomError::new(
            kind,
            node,
            self.provider.kind_of(node),
            self.provider.position_of(node),
        )
    }

    pub fn violation(&self, node: NodeHandle, violation: ContractViolation) -> DomError {
        self.error(node, DomErrorKind::ProviderContractViolation(violation))
    }

    pub fn unsupported(&self, node: NodeHandle) -> DomError {
        self.error(node, DomErrorKind::UnsupportedNodeKind(self.kind_of(node)))
    }

    fn chain_error(&self, error: ChainError) -> DomError {
        self.error(error.node, DomErrorKind::MalformedChain(error.defect))
    }

    /// Fail with `UnsupportedNodeKind` unless `node` has one of `kinds`.
    pub fn expect_kind(&self, node: NodeHandle, kinds: &[NodeKind]) -> DomResult<NodeKind> {
        let kind = self.kind_of(node);
        if kinds.contains(&kind) {
            Ok(kind)
        } else {
            Err(self.unsupported(node))
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Run `f` with `node` pushed on the ancestor stack.
    ///
    /// Rejects a node that is already one of its own ancestors and nesting
    /// beyond [`BuildOptions::max_depth`]. The stack is restored whether or
    /// not `f` succeeds.
    pub fn descend<T>(
        &mut self,
        node: NodeHandle,
        f: impl FnOnce(&mut Self) -> DomResult<T>,
    ) -> DomResult<T> {
        if self.ancestors.contains(&node) {
            return Err(self.violation(node, ContractViolation::AncestorReference));
        }
        if self.ancestors.len() >= self.options.max_depth {
            return Err(self.violation(
                node,
                ContractViolation::DepthExceeded {
                    limit: self.options.max_depth,
                },
            ));
        }

        self.ancestors.push(node);
        let result = f(self);
        self.ancestors.pop();
        result
    }

    /// Build `T` from `node` one level down.
    pub fn parse<T: FromIr>(&mut self, node: NodeHandle) -> DomResult<T> {
        self.descend(node, |ctx| T::parse(ctx, node))
    }

    /// Handles of the chain starting at `head`, in order.
    pub fn walk(&self, head: Option<NodeHandle>) -> DomResult<Vec<NodeHandle>> {
        let provider = self.provider;
        ChainWalker::new(self.options.max_chain_length)
            .walk(head, |node| provider.next_of(node))
            .map_err(|error| self.chain_error(error))
    }

    /// Build every element of the chain starting at `head`, in order.
    pub fn chain<T>(
        &mut self,
        head: Option<NodeHandle>,
        mut build: impl FnMut(&mut Self, NodeHandle) -> DomResult<T>,
    ) -> DomResult<Vec<T>> {
        let provider = self.provider;
        let walker = ChainWalker::new(self.options.max_chain_length);
        let result = walker.walk_and_build(
            head,
            |node| provider.next_of(node),
            |node| build(&mut *self, node),
        );
        match result {
            Ok(items) => Ok(items),
            Err(WalkError::Chain(error)) => Err(self.chain_error(error)),
            Err(WalkError::Build(error)) => Err(error),
        }
    }

    // =========================================================================
    // Fields and attributes
    // =========================================================================

    fn check_field(&self, node: NodeHandle, field: Field) -> DomResult<()> {
        if self.kind_of(node).has_field(field) {
            Ok(())
        } else {
            Err(self.violation(node, ContractViolation::FieldNotApplicable { field }))
        }
    }

    /// Follow an optional field edge of `node`.
    pub fn field(&self, node: NodeHandle, field: Field) -> DomResult<Option<NodeHandle>> {
        self.check_field(node, field)?;
        Ok(self.provider.field(node, field))
    }

    /// Follow a field edge that must be present.
    pub fn field_required(&self, node: NodeHandle, field: Field) -> DomResult<NodeHandle> {
        self.field(node, field)?
            .ok_or_else(|| self.violation(node, ContractViolation::MissingField { field }))
    }

    pub fn generic_chain(&self, node: NodeHandle) -> DomResult<Option<NodeHandle>> {
        self.check_field(node, Field::GenericChain)?;
        Ok(self.provider.generic_chain_head(node))
    }

    pub fn interface_chain(&self, node: NodeHandle) -> DomResult<Option<NodeHandle>> {
        self.check_field(node, Field::InterfaceChain)?;
        Ok(self.provider.interface_chain_head(node))
    }

    pub fn return_type_mark(&self, node: NodeHandle) -> DomResult<NodeHandle> {
        self.check_field(node, Field::ReturnTypeMark)?;
        self.provider.return_type_mark(node).ok_or_else(|| {
            self.violation(
                node,
                ContractViolation::MissingField {
                    field: Field::ReturnTypeMark,
                },
            )
        })
    }

    /// Identifier of a definition or name reference, validated.
    pub fn identifier(&self, node: NodeHandle) -> DomResult<String> {
        let name = self.provider.name_of(node);
        validate_identifier(name)
            .map(str::to_owned)
            .map_err(|defect| self.error(node, DomErrorKind::UnresolvableName(defect)))
    }
}

/// Accept identifiers that can name something in a design.
///
/// Basic identifiers, operator symbols and character literals may not
/// contain whitespace; extended identifiers (`\like this\`) may. Control
/// characters are never allowed.
fn validate_identifier(name: Option<&str>) -> Result<&str, NameDefect> {
    let name = name.ok_or(NameDefect::Missing)?;
    if name.is_empty() {
        return Err(NameDefect::Empty);
    }

    let extended = name.len() >= 2 && name.starts_with('\\') && name.ends_with('\\');
    let invalid = name
        .chars()
        .any(|c| c.is_control() || (!extended && c.is_whitespace()));
    if invalid {
        return Err(NameDefect::InvalidCharacter(name.to_owned()));
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier(Some("clk")), Ok("clk"));
        assert_eq!(validate_identifier(Some("'0'")), Ok("'0'"));
        assert_eq!(validate_identifier(Some("\"+\"")), Ok("\"+\""));
        assert_eq!(validate_identifier(Some("\\my signal\\")), Ok("\\my signal\\"));
        assert_eq!(validate_identifier(None), Err(NameDefect::Missing));
        assert_eq!(validate_identifier(Some("")), Err(NameDefect::Empty));
        assert_eq!(
            validate_identifier(Some("my signal")),
            Err(NameDefect::InvalidCharacter("my signal".into()))
        );
        assert_eq!(
            validate_identifier(Some("\\bell\u{7}\\")),
            Err(NameDefect::InvalidCharacter("\\bell\u{7}\\".into()))
        );
    }
}
