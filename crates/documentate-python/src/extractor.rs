//! Extractor for building a documentation [`Module`] from Python source
//!
//! Walks the top level of the syntax tree once. Only class definitions are
//! documented at module scope; inside a class, methods and annotated class
//! variables are kept and every other statement is skipped.

use crate::visitor::{annotation_name, LineIndex, SourceContext};
use documentate_model::{
    Argument, Class, ExtractorConfig, Function, Module, ParserError, ParserResult, Variable,
};
use rustpython_parser::ast::{self, Expr, Stmt};
use rustpython_parser::Parse;
use std::path::Path;

/// Extract a module from Python source code
pub fn extract(
    source: &str,
    file_path: &Path,
    config: &ExtractorConfig,
) -> ParserResult<Module> {
    let suite = ast::Suite::parse(source, &file_path.display().to_string()).map_err(|e| {
        let (line, column) = LineIndex::new(source).line_col(usize::from(e.offset));
        ParserError::SyntaxError(file_path.to_path_buf(), line, column, e.error.to_string())
    })?;

    let ctx = SourceContext::new(source, config.include_docs);
    let mut module = Module::from_path(file_path);
    module.docstring = ctx.docstring(&suite);

    for stmt in &suite {
        if let Stmt::ClassDef(class_def) = stmt {
            module.add_class(extract_class(class_def, &ctx));
        }
    }

    Ok(module)
}

fn extract_class(class_def: &ast::StmtClassDef, ctx: &SourceContext<'_>) -> Class {
    let bases = class_def
        .bases
        .iter()
        .filter_map(|base| ctx.text(base))
        .map(str::to_string)
        .collect();

    let line = ctx.line(usize::from(class_def.range.start()));
    let mut class = Class::new(class_def.name.as_str(), line)
        .with_bases(bases)
        .with_decorators(ctx.decorators(&class_def.decorator_list));
    class.docstring = ctx.docstring(&class_def.body);

    for stmt in &class_def.body {
        match stmt {
            Stmt::FunctionDef(def) => {
                class.add_method(extract_function(FunctionView::from(def), ctx));
            }
            Stmt::AsyncFunctionDef(def) => {
                class.add_method(extract_function(FunctionView::from(def), ctx));
            }
            Stmt::AnnAssign(assign) => {
                if let Some(variable) = extract_class_variable(assign) {
                    class.add_class_variable(variable);
                }
            }
            // Nested classes, plain assignments and statements are not documented
            _ => {}
        }
    }

    class
}

fn extract_class_variable(assign: &ast::StmtAnnAssign) -> Option<Variable> {
    let Expr::Name(target) = assign.target.as_ref() else {
        return None;
    };
    let variable = Variable::new(target.id.as_str());
    Some(match annotation_name(&assign.annotation) {
        Some(type_ann) => variable.with_type(type_ann),
        None => variable,
    })
}

/// Fields shared by `def` and `async def`
struct FunctionView<'a> {
    name: &'a str,
    args: &'a ast::Arguments,
    returns: Option<&'a Expr>,
    body: &'a [Stmt],
    decorator_list: &'a [Expr],
    start: usize,
    is_async: bool,
}

impl<'a> From<&'a ast::StmtFunctionDef> for FunctionView<'a> {
    fn from(def: &'a ast::StmtFunctionDef) -> Self {
        Self {
            name: def.name.as_str(),
            args: &def.args,
            returns: def.returns.as_deref(),
            body: &def.body,
            decorator_list: &def.decorator_list,
            start: usize::from(def.range.start()),
            is_async: false,
        }
    }
}

impl<'a> From<&'a ast::StmtAsyncFunctionDef> for FunctionView<'a> {
    fn from(def: &'a ast::StmtAsyncFunctionDef) -> Self {
        Self {
            name: def.name.as_str(),
            args: &def.args,
            returns: def.returns.as_deref(),
            body: &def.body,
            decorator_list: &def.decorator_list,
            start: usize::from(def.range.start()),
            is_async: true,
        }
    }
}

fn extract_function(def: FunctionView<'_>, ctx: &SourceContext<'_>) -> Function {
    // Positional-only then regular positional parameters; *args, keyword-only
    // and **kwargs are not part of the documented signature
    let arguments = def
        .args
        .posonlyargs
        .iter()
        .chain(def.args.args.iter())
        .map(|param| {
            let argument = Argument::new(param.def.arg.as_str());
            match param
                .def
                .annotation
                .as_deref()
                .and_then(annotation_name)
            {
                Some(type_ann) => argument.with_type(type_ann),
                None => argument,
            }
        })
        .collect();

    let mut function = Function::new(def.name, ctx.line(def.start))
        .with_arguments(arguments)
        .with_returns(ctx.return_type(def.returns))
        .with_decorators(ctx.decorators(def.decorator_list));
    function.docstring = ctx.docstring(def.body);
    if def.is_async {
        function = function.async_fn();
    }

    function
}
