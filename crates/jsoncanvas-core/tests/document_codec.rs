//! Whole-document decode / encode tests

use jsoncanvas_core::{
    decode, decode_color, decode_str, encode, encode_pretty, BackgroundStyle, Canvas,
    CanvasColor, ColorError, Edge, EndShape, Error, GroupNode, LinkNode, Node, NodeBody,
    NodeType, Side,
};
use serde_json::{json, Value};

fn full_canvas() -> Canvas {
    Canvas::new()
        .with_nodes(vec![
            Node::text("1", 100, 200, 300, 150, "Hello, JSON!")
                .with_color(CanvasColor::preset(1).unwrap()),
            Node::file("2", 500, 300, 200, 100, "document.pdf")
                .with_color(CanvasColor::hex("#00FF00").unwrap()),
            Node::file("3", -40, -80, 200, 100, "notes/plan.md").with_subpath("#Goals"),
            Node::link("4", 0, 400, 250, 120, "https://jsoncanvas.org"),
            Node::group("5", -500, -500, 1200, 900)
                .with_label("Everything")
                .with_background("assets/bg.png", Some(BackgroundStyle::Ratio))
                .with_color(CanvasColor::hex("#abc").unwrap()),
            Node::group("6", 0, 0, 10, 10),
        ])
        .with_edges(vec![
            Edge::new("e1", "1", "2")
                .with_color(CanvasColor::preset(3).unwrap())
                .with_label("Connection"),
            Edge::new("e2", "2", "3")
                .with_from_side(Side::Right)
                .with_to_side(Side::Left)
                .with_from_end(EndShape::Arrow)
                .with_to_end(EndShape::None),
            Edge::new("e3", "4", "nowhere").without_to_end(),
        ])
}

#[test]
fn test_roundtrip_full_canvas() {
    let canvas = full_canvas();
    let bytes = encode(&canvas).unwrap();
    assert_eq!(decode(&bytes).unwrap(), canvas);

    let pretty = encode_pretty(&canvas).unwrap();
    assert_eq!(decode(&pretty).unwrap(), canvas);
}

#[test]
fn test_roundtrip_after_changing_node_kind() {
    // `label` and `url` are stray on a text node and kept as extras
    let mut canvas = decode_str(
        r#"{"nodes":[{"id":"t","type":"text","x":0,"y":0,"width":10,"height":10,
            "text":"hi","label":"stray","url":"https://example.com","custom":1}]}"#,
    )
    .unwrap();
    assert_eq!(canvas.nodes[0].extra().len(), 3);

    canvas.nodes[0].set_body(GroupNode {
        label: Some("real".into()),
        ..GroupNode::default()
    });
    let encoded = encode(&canvas).unwrap();
    let text = String::from_utf8(encoded.clone()).unwrap();
    assert_eq!(text.matches("\"label\"").count(), 1);

    let back = decode(&encoded).unwrap();
    assert_eq!(back, canvas);
    assert_eq!(back.nodes[0].label(), Some("real"));
    assert!(matches!(back.nodes[0].body(), NodeBody::Group(_)));
    assert_eq!(back.nodes[0].extra().get("custom"), Some(&Value::from(1)));

    canvas.nodes[0].set_body(NodeBody::Link(LinkNode {
        url: "https://example.org".into(),
    }));
    let back = decode(&encode_pretty(&canvas).unwrap()).unwrap();
    assert_eq!(back, canvas);
    assert_eq!(back.nodes[0].url(), Some("https://example.org"));
}

#[test]
fn test_roundtrip_preserves_order() {
    let nodes: Vec<Node> = (0..20)
        .rev()
        .map(|i| Node::text(format!("n{i}"), i, -i, 10, 10, i.to_string()))
        .collect();
    let canvas = Canvas::new().with_nodes(nodes);
    let decoded = decode(&encode(&canvas).unwrap()).unwrap();
    let ids: Vec<_> = decoded.nodes.iter().map(|n| n.id.as_str()).collect();
    let expected: Vec<_> = canvas.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_encoding_is_deterministic() {
    let canvas = full_canvas();
    assert_eq!(encode(&canvas).unwrap(), encode(&canvas).unwrap());
    let reencoded = encode(&decode(&encode(&canvas).unwrap()).unwrap()).unwrap();
    assert_eq!(reencoded, encode(&canvas).unwrap());
}

#[test]
fn test_decode_reference_document() {
    let input = r##"
    {
        "nodes": [
            {
                "id": "1",
                "type": "text",
                "x": 100,
                "y": 200,
                "width": 300,
                "height": 150,
                "color": "1",
                "text": "Hello, JSON!"
            },
            {
                "id": "2",
                "type": "file",
                "x": 500,
                "y": 300,
                "width": 200,
                "height": 100,
                "color": "#00FF00",
                "file": "document.pdf"
            }
        ],
        "edges": [
            {
                "id": "e1",
                "fromNode": "1",
                "toNode": "2",
                "color": "3",
                "label": "Connection"
            }
        ]
    }
    "##;
    let canvas = decode_str(input).unwrap();
    assert_eq!(canvas.node_count(), 2);
    assert_eq!(canvas.edge_count(), 1);

    let first = &canvas.nodes[0];
    assert_eq!(first.node_type(), NodeType::Text);
    assert_eq!((first.x, first.y, first.width, first.height), (100, 200, 300, 150));
    assert_eq!(first.color, Some(CanvasColor::preset(1).unwrap()));
    assert_eq!(first.text_content(), Some("Hello, JSON!"));

    let second = &canvas.nodes[1];
    assert_eq!(second.node_type(), NodeType::File);
    assert_eq!(second.color, Some(CanvasColor::hex("#00FF00").unwrap()));
    assert_eq!(second.file_path(), Some("document.pdf"));
    assert_eq!(second.subpath(), None);

    let edge = &canvas.edges[0];
    assert_eq!((edge.from_node.as_str(), edge.to_node.as_str()), ("1", "2"));
    assert_eq!(edge.color, Some(CanvasColor::preset(3).unwrap()));
    assert_eq!(edge.label.as_deref(), Some("Connection"));
    assert_eq!(edge.to_end, None);
}

#[test]
fn test_end_to_end_example() {
    let input = br#"{"nodes":[{"id":"1","type":"text","x":10,"y":20,"width":100,"height":50,"color":"1","text":"Hello"}],"edges":[]}"#;
    let canvas = decode(input).unwrap();
    assert_eq!(
        canvas.nodes,
        vec![Node::text("1", 10, 20, 100, 50, "Hello").with_color(CanvasColor::preset(1).unwrap())]
    );
    assert!(canvas.edges.is_empty());

    let original: Value = serde_json::from_slice(input).unwrap();
    let reencoded: Value = serde_json::from_slice(&encode(&canvas).unwrap()).unwrap();
    assert_eq!(reencoded, original);
}

#[test]
fn test_absent_arrays() {
    let canvas = decode(b"{}").unwrap();
    assert!(canvas.nodes.is_empty());
    assert!(canvas.edges.is_empty());

    let only_edges = decode(br#"{"edges":[]}"#).unwrap();
    assert!(only_edges.is_empty());
}

#[test]
fn test_dangling_edge_decodes() {
    let canvas =
        decode(br#"{"nodes":[],"edges":[{"id":"e1","fromNode":"x","toNode":"y"}]}"#).unwrap();
    let edge = &canvas.edges[0];
    assert_eq!(canvas.endpoints(edge), (None, None));
}

#[test]
fn test_unknown_node_type_is_an_error() {
    let err = decode(
        br#"{"nodes":[{"id":"1","type":"image","x":0,"y":0,"width":1,"height":1}]}"#,
    )
    .unwrap_err();
    assert_eq!(err.code(), "unknown_enum_value");
}

#[test]
fn test_unknown_background_style_is_an_error() {
    let err = decode(
        br#"{"nodes":[{"id":"g","type":"group","x":0,"y":0,"width":1,"height":1,"backgroundStyle":"stretch"}]}"#,
    )
    .unwrap_err();
    match err {
        Error::UnknownEnumValue { field, value, .. } => {
            assert_eq!(field, "backgroundStyle");
            assert_eq!(value, "stretch");
        }
        other => panic!("Expected UnknownEnumValue, got {other:?}"),
    }
}

#[test]
fn test_bad_element_fails_whole_document() {
    let input = json!({
        "nodes": [
            {"id": "ok", "type": "text", "x": 0, "y": 0, "width": 1, "height": 1, "text": "fine"},
            {"id": "bad", "type": "text", "x": 0, "y": 0, "width": 1, "height": 1, "text": "x",
             "color": "0"}
        ]
    });
    let err = decode(input.to_string().as_bytes()).unwrap_err();
    assert_eq!(err.code(), "invalid_color_value");
    let location = err.location().unwrap();
    assert_eq!(location.index, Some(1));
    assert_eq!(location.id.as_deref(), Some("bad"));
}

#[test]
fn test_color_boundaries() {
    for i in 1..=6 {
        assert_eq!(
            decode_color(&i.to_string()),
            Ok(CanvasColor::preset(i).unwrap())
        );
    }
    assert!(matches!(decode_color("0"), Err(ColorError::InvalidValue(_))));
    assert!(matches!(decode_color("7"), Err(ColorError::InvalidValue(_))));

    for hex in ["#FFF", "#ffffff", "#A1B2C3"] {
        assert!(decode_color(hex).is_ok(), "{hex}");
    }
    assert!(matches!(decode_color("#12"), Err(ColorError::InvalidFormat(_))));
    assert!(matches!(decode_color("#GGGGGG"), Err(ColorError::InvalidFormat(_))));
    assert!(matches!(decode_color("123456"), Err(ColorError::InvalidValue(_))));
}

#[test]
fn test_negative_positions() {
    let canvas = Canvas::new().with_nodes(vec![Node::text("n", -1200, -34, 1, 1, "far")]);
    let decoded = decode(&encode(&canvas).unwrap()).unwrap();
    assert_eq!((decoded.nodes[0].x, decoded.nodes[0].y), (-1200, -34));
}
