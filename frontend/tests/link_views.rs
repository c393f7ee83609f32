use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use shared::GeneratedLink;
use sproutfuture_frontend::components::generated_links::{GeneratedLinks, GeneratedLinksProps};
use sproutfuture_frontend::components::link_generator::{LinkGenerator, LinkGeneratorProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};
use yew::platform::time::sleep;
use yew::{AppHandle, BaseComponent, Callback};

wasm_bindgen_test_configure!(run_in_browser);

async fn settle() {
    sleep(Duration::ZERO).await;
}

async fn mount<C: BaseComponent>(props: C::Properties) -> (Element, AppHandle<C>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    settle().await;
    (root, handle)
}

async fn type_into(root: &Element, selector: &str, value: &str) {
    let input: HtmlInputElement = root.query_selector(selector).unwrap().unwrap().dyn_into().unwrap();
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    input
        .dispatch_event(&Event::new_with_event_init_dict("input", &init).unwrap())
        .unwrap();
    settle().await;
}

async fn click(root: &Element, selector: &str) {
    let button: HtmlElement = root.query_selector(selector).unwrap().unwrap().dyn_into().unwrap();
    button.click();
    settle().await;
}

fn links() -> Vec<GeneratedLink> {
    vec![
        GeneratedLink::new("Mia", "https://x/1", "/i1.png"),
        GeneratedLink::new("Leo", "https://x/2", "/i2.png"),
    ]
}

#[wasm_bindgen_test]
async fn test_generator_emits_name_and_link() {
    let generated = Rc::new(RefCell::new(Vec::<(String, String)>::new()));
    let on_generate_link = {
        let generated = generated.clone();
        Callback::from(move |pair: (String, String)| generated.borrow_mut().push(pair))
    };
    let (root, _handle) = mount::<LinkGenerator>(LinkGeneratorProps {
        user_id: "u1".to_string(),
        on_generate_link,
        existing_links_count: 0,
        existing_child_names: vec![],
    })
    .await;

    type_into(&root, "#child-name", "  Ava  Rose ").await;
    click(&root, ".link-generator-form button[type=submit]").await;

    let generated = generated.borrow();
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].0, "Ava Rose");
    assert!(generated[0].1.contains("/gift/u1/ava-rose-"));
}

#[wasm_bindgen_test]
async fn test_generator_rejects_duplicate_name() {
    let generated = Rc::new(RefCell::new(0u32));
    let on_generate_link = {
        let generated = generated.clone();
        Callback::from(move |_: (String, String)| *generated.borrow_mut() += 1)
    };
    let (root, _handle) = mount::<LinkGenerator>(LinkGeneratorProps {
        user_id: "u1".to_string(),
        on_generate_link,
        existing_links_count: 1,
        existing_child_names: vec!["Mia".to_string()],
    })
    .await;

    type_into(&root, "#child-name", "mia").await;
    click(&root, ".link-generator-form button[type=submit]").await;

    assert_eq!(*generated.borrow(), 0);
    let error = root.query_selector(".form-error").unwrap().unwrap();
    assert_eq!(error.text_content().unwrap(), "A link for mia already exists");
}

#[wasm_bindgen_test]
async fn test_remove_emits_replacement_list() {
    let updates = Rc::new(RefCell::new(Vec::<Vec<GeneratedLink>>::new()));
    let on_update_links = {
        let updates = updates.clone();
        Callback::from(move |list: Vec<GeneratedLink>| updates.borrow_mut().push(list))
    };
    let (root, _handle) = mount::<GeneratedLinks>(GeneratedLinksProps {
        links: links(),
        on_update_links,
    })
    .await;

    click(&root, ".generated-link:first-child .btn-danger").await;

    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0], vec![GeneratedLink::new("Leo", "https://x/2", "/i2.png")]);
}

#[wasm_bindgen_test]
async fn test_rename_emits_replacement_list() {
    let updates = Rc::new(RefCell::new(Vec::<Vec<GeneratedLink>>::new()));
    let on_update_links = {
        let updates = updates.clone();
        Callback::from(move |list: Vec<GeneratedLink>| updates.borrow_mut().push(list))
    };
    let (root, _handle) = mount::<GeneratedLinks>(GeneratedLinksProps {
        links: links(),
        on_update_links,
    })
    .await;

    click(&root, ".generated-link:nth-child(2) .btn-secondary").await;
    type_into(&root, ".generated-link-rename input", "Leon").await;
    click(&root, ".generated-link-rename button[type=submit]").await;

    let updates = updates.borrow();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0][0].child_name, "Mia");
    assert_eq!(updates[0][1].child_name, "Leon");
}
