// Browser tests. Run with: wasm-pack test --headless --firefox move_highlight_wasm

use move_highlight_wasm::{
    clear_suggestion, configure, draw_move_suggestion, draw_suggestion, init_logging,
    is_suggestion_shown,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);


const BOARD_ID: &str = "test-board";

fn document() -> web_sys::Document { web_sys::window().unwrap().document().unwrap() }

// Replaces the test board with a fresh 8x8 grid of 40px squares named by `name`.
fn setup_board(name: impl Fn(u8, u8) -> String) {
    init_logging("debug");
    let document = document();
    if let Some(old) = document.get_element_by_id(BOARD_ID) {
        old.remove();
    }
    let board = document.create_element("div").unwrap();
    board.set_id(BOARD_ID);
    board
        .set_attribute("style", "position: absolute; left: 0; top: 0; width: 320px; height: 320px")
        .unwrap();
    for row in 0..8 {
        for col in 0..8 {
            let square = document.create_element("div").unwrap();
            square.set_class_name(&format!("square square-{}", name(col, row)));
            let style = format!(
                "position: absolute; left: {}px; top: {}px; width: 40px; height: 40px",
                col as u32 * 40,
                (7 - row) as u32 * 40
            );
            square.set_attribute("style", &style).unwrap();
            board.append_child(&square).unwrap();
        }
    }
    document.body().unwrap().append_child(&board).unwrap();
    configure(&format!(r##"{{ "board_selector": "#{BOARD_ID}" }}"##)).unwrap();
}

fn algebraic(col: u8, row: u8) -> String { format!("{}{}", (b'a' + col) as char, row + 1) }

fn marked_count() -> u32 { document().get_elements_by_class_name("highlight").length() }

fn overlay() -> Option<web_sys::Element> { document().get_element_by_id("suggestion-overlay") }

#[wasm_bindgen_test]
fn outline_mode() {
    setup_board(algebraic);
    draw_suggestion("e2", "e4", None).unwrap();
    assert_eq!(marked_count(), 2);
    assert!(overlay().is_none());
    assert!(is_suggestion_shown().unwrap());

    clear_suggestion().unwrap();
    assert_eq!(marked_count(), 0);
    assert!(!is_suggestion_shown().unwrap());
}

#[wasm_bindgen_test]
fn overlay_mode() {
    setup_board(algebraic);
    draw_suggestion("a1", "b2", Some("overlay".to_owned())).unwrap();
    let overlay_element = overlay().expect("overlay must be mounted");
    let rect = overlay_element.get_bounding_client_rect();
    assert_eq!(rect.width(), 80.0);
    assert_eq!(rect.height(), 80.0);
    assert!(overlay_element.get_attribute("style").unwrap().contains("pointer-events: none"));
    assert_eq!(marked_count(), 0);

    draw_suggestion("a1", "b2", Some("outline".to_owned())).unwrap();
    assert!(overlay().is_none());
    assert_eq!(marked_count(), 2);
}

#[wasm_bindgen_test]
fn overlay_follows_page_scroll() {
    setup_board(algebraic);
    let document = document();
    let spacer = document.create_element("div").unwrap();
    spacer.set_id("test-spacer");
    spacer.set_attribute("style", "height: 5000px").unwrap();
    document.body().unwrap().append_child(&spacer).unwrap();
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 100.0);
    assert_eq!(window.scroll_y().unwrap(), 100.0);

    draw_suggestion("a1", "b2", Some("overlay".to_owned())).unwrap();
    let overlay_element = overlay().expect("overlay must be mounted");
    // b2 is 240px below the top of the page, wherever the viewport is.
    assert!(overlay_element.get_attribute("style").unwrap().contains("top: 240px"));
    let b2 = document.query_selector(".square-b2").unwrap().unwrap();
    assert_eq!(
        overlay_element.get_bounding_client_rect().top(),
        b2.get_bounding_client_rect().top()
    );

    clear_suggestion().unwrap();
    spacer.remove();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn missing_squares_do_nothing() {
    setup_board(algebraic);
    draw_suggestion("e2", "e4", Some("overlay".to_owned())).unwrap();
    draw_suggestion("e2", "z9", None).unwrap();
    assert!(overlay().is_none());
    assert_eq!(marked_count(), 0);

    // Not valid CSS once turned into a selector; still just a miss.
    draw_suggestion("e2", "[", None).unwrap();
    assert_eq!(marked_count(), 0);
}

#[wasm_bindgen_test]
fn move_suggestion_on_numeric_flipped_board() {
    setup_board(|col, row| format!("{}{}", col + 1, row + 1));
    configure(&format!(
        r##"{{ "board_selector": "#{BOARD_ID}", "square_naming": "numeric" }}"##
    ))
    .unwrap();
    draw_move_suggestion("e2e4", None, true).unwrap();
    let is_marked = |id: &str| {
        document().query_selector(&format!(".highlight.square-{id}")).unwrap().is_some()
    };
    assert!(is_marked("47"));
    assert!(is_marked("45"));
    assert_eq!(marked_count(), 2);

    assert!(draw_move_suggestion("e2e9", None, false).is_err());
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(configure(r#"{ "marker_class": "" }"#).is_err());
    assert!(configure("{").is_err());
}
