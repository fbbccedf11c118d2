use astviz_core::{Category, GlobalConfig, LanguageTrait, OutputGraph, build_output_graph};
use astviz_java::LangJava;
use pretty_assertions::assert_eq;

fn on_show_view() -> String {
    textwrap::dedent(
        r#"
        // Snippet from a GWT client view.
        @java.lang.Override
        public void onShowView() {
            super.onShowView();
            com.google.gwt.user.client.Window.enableScrolling(false);
            com.google.gerrit.client.JumpKeys.enable(false);
            if (prefs.hideTopMenu()) {
                com.google.gerrit.client.Gerrit.setHeaderVisible(false);
            }
            resizeHandler = com.google.gwt.user.client.Window.addResizeHandler(new com.google.gwt.event.logical.shared.ResizeHandler() {
                @java.lang.Override
                public void onResize(com.google.gwt.event.logical.shared.ResizeEvent event) {
                    resizeCodeMirror();
                }
            });
        }
        "#,
    )
}

fn edges(graph: &OutputGraph) -> Vec<(u32, u32)> {
    graph
        .edges()
        .iter()
        .map(|edge| (edge.from.0, edge.to.0))
        .collect()
}

#[test]
fn statement_level_graph() {
    let tree = LangJava::parse(on_show_view().as_bytes()).unwrap();
    let config = GlobalConfig::default().with_visit(&[
        Category::MethodDeclaration,
        Category::Block,
        Category::IfStatement,
        Category::ExpressionStatement,
        Category::AnonymousClassDeclaration,
    ]);
    let graph = build_output_graph(&tree, &config);

    let categories: Vec<Category> = graph.nodes().iter().map(|node| node.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::MethodDeclaration,
            Category::Block,
            Category::ExpressionStatement,
            Category::ExpressionStatement,
            Category::ExpressionStatement,
            Category::IfStatement,
            Category::Block,
            Category::ExpressionStatement,
            Category::ExpressionStatement,
            Category::AnonymousClassDeclaration,
            Category::MethodDeclaration,
            Category::Block,
            Category::ExpressionStatement,
        ]
    );
    assert_eq!(
        edges(&graph),
        vec![
            (0, 1),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (5, 6),
            (6, 7),
            (1, 8),
            (8, 9),
            (9, 10),
            (10, 11),
            (11, 12),
        ]
    );
}

#[test]
fn detailed_labels() {
    let tree = LangJava::parse(on_show_view().as_bytes()).unwrap();
    let config = GlobalConfig::default()
        .with_visit(&[Category::MethodDeclaration, Category::IfStatement])
        .with_detailed(true);
    let graph = build_output_graph(&tree, &config);

    let labels: Vec<&str> = graph.nodes().iter().map(|node| node.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "MethodDeclaration\nName: onShowView\nParameters: \nReturn Type: void",
            "IfStatement\nCondition: prefs.hideTopMenu()",
            "MethodDeclaration\nName: onResize\nParameters: com.google.gwt.event.logical.shared.ResizeEvent event\nReturn Type: void",
        ]
    );
    assert_eq!(edges(&graph), vec![(0, 1), (0, 2)]);
}

#[test]
fn expressions_can_be_gated_off() {
    let tree = LangJava::parse(on_show_view().as_bytes()).unwrap();
    let config = GlobalConfig::default().with_visit(&[
        Category::ExpressionStatement,
        Category::MethodInvocation,
        Category::SuperMethodInvocation,
        Category::BooleanLiteral,
    ]);

    let with_expressions = build_output_graph(&tree, &config);
    assert!(
        with_expressions
            .nodes()
            .iter()
            .any(|node| node.category == Category::SuperMethodInvocation)
    );
    assert_eq!(
        with_expressions
            .nodes()
            .iter()
            .filter(|node| node.category == Category::BooleanLiteral)
            .count(),
        3
    );

    let config = config.with_include_expressions(false);
    let without = build_output_graph(&tree, &config);
    assert_eq!(without.len(), 6);
    // The anonymous handler's statement hangs off the assignment statement.
    assert_eq!(edges(&without), vec![(4, 5)]);
}

#[test]
fn compilation_unit_container_is_suppressed() {
    let source = textwrap::dedent(
        r#"
        package demo;

        interface Greeter {
            String greet(String name);
        }

        class Hello implements Greeter {
            public String greet(String name) {
                return "Hello " + name;
            }
        }
        "#,
    );
    let tree = LangJava::parse(source.as_bytes()).unwrap();
    assert_eq!(tree.category(tree.root()), Category::CompilationUnit);

    let config = GlobalConfig::default()
        .with_visit(&[
            Category::TypeDeclaration,
            Category::MethodDeclaration,
            Category::ReturnStatement,
        ])
        .with_detailed(true);
    let graph = build_output_graph(&tree, &config);

    // Greeter and Hello wrap the whole file and are not drawn.
    let labels: Vec<&str> = graph.nodes().iter().map(|node| node.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "MethodDeclaration\nName: greet\nParameters: String name\nReturn Type: String",
            "MethodDeclaration\nName: greet\nParameters: String name\nReturn Type: String",
            "ReturnStatement\nReturns: \"Hello \" + name",
        ]
    );
    assert_eq!(edges(&graph), vec![(1, 2)]);
}

#[test]
fn nested_types_of_a_compilation_unit_are_drawn() {
    let source = textwrap::dedent(
        r#"
        class A {
            void f() {
                if (x) {
                    return;
                }
            }
            static class Inner {}
        }
        "#,
    );
    let tree = LangJava::parse(source.as_bytes()).unwrap();
    let config = GlobalConfig::default().with_visit(&[
        Category::TypeDeclaration,
        Category::MethodDeclaration,
        Category::IfStatement,
    ]);
    let graph = build_output_graph(&tree, &config);

    let categories: Vec<Category> = graph.nodes().iter().map(|node| node.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::MethodDeclaration,
            Category::IfStatement,
            Category::TypeDeclaration,
        ]
    );
    assert_eq!(edges(&graph), vec![(0, 1)]);
}
