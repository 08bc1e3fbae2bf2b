use super::*;

const CLOSERS: [DrawerInput; 4] =
    [DrawerInput::Overlay, DrawerInput::CloseButton, DrawerInput::Escape, DrawerInput::AnchorNavigation];

#[test]
fn starts_closed() {
    let drawer = Drawer::default();
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(drawer.state().aria_hidden(), "true");
    assert_eq!(drawer.state().aria_expanded(), "false");
}

#[test]
fn menu_button_toggles() {
    let mut drawer = Drawer::default();
    assert_eq!(drawer.handle(DrawerInput::MenuButton), Some(DrawerState::Open));
    assert_eq!(drawer.state().aria_hidden(), "false");
    assert_eq!(drawer.state().aria_expanded(), "true");
    assert_eq!(drawer.handle(DrawerInput::MenuButton), Some(DrawerState::Closed));
}

#[test]
fn shortcut_toggles_like_menu_button() {
    let mut drawer = Drawer::default();
    assert_eq!(drawer.handle(DrawerInput::Shortcut), Some(DrawerState::Open));
    assert_eq!(drawer.handle(DrawerInput::Shortcut), Some(DrawerState::Closed));
}

#[test]
fn every_closer_closes_an_open_drawer() {
    for input in CLOSERS {
        let mut drawer = Drawer::default();
        drawer.handle(DrawerInput::MenuButton);
        assert_eq!(drawer.handle(input), Some(DrawerState::Closed), "{input:?}");
    }
}

#[test]
fn closers_never_open() {
    for input in CLOSERS {
        let mut drawer = Drawer::default();
        assert_eq!(drawer.handle(input), None, "{input:?}");
        assert_eq!(drawer.state(), DrawerState::Closed);
    }
}
