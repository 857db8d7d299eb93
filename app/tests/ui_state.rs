use app::state::{NavbarStyle, Section, UiState, SCROLL_THRESHOLD};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn menu_toggle_twice_is_a_no_op() {
    setup();

    for initial in [false, true] {
        let mut state = UiState {
            is_menu_open: initial,
            ..UiState::default()
        };
        state.toggle_menu();
        assert_eq!(!initial, state.is_menu_open);
        state.toggle_menu();
        assert_eq!(initial, state.is_menu_open);
    }
}

#[test]
fn navbar_turns_opaque_strictly_past_the_threshold() {
    setup();

    let mut state = UiState::default();
    for offset in [0.0, 1.0, 49.0, 50.0, 51.0, 120.0, 5000.0] {
        state.record_scroll(offset);
        let expected = if offset > SCROLL_THRESHOLD as f64 {
            NavbarStyle::Opaque
        } else {
            NavbarStyle::Transparent
        };
        assert_eq!(expected, state.navbar_style(), "offset {offset}");
    }

    state.record_scroll(50.0);
    assert_eq!(50, state.scroll_y);
    assert_eq!(NavbarStyle::Transparent, state.navbar_style());
}

#[test]
fn exactly_one_section_is_active() {
    setup();

    let mut state = UiState::default();
    let clicks = [
        Section::Contacto,
        Section::Inicio,
        Section::Habilidades,
        Section::Habilidades,
        Section::Proyectos,
        Section::Inicio,
        Section::Contacto,
    ];
    for section in clicks {
        state.select_section(section);
        let active: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|each| state.is_active(*each))
            .collect();
        assert_eq!(vec![section], active);
    }
}

#[test]
fn mobile_click_closes_the_menu() {
    setup();

    for section in Section::ALL {
        let mut state = UiState::default();
        state.toggle_menu();
        assert!(state.is_menu_open);
        state.select_section(section);
        assert!(!state.is_menu_open);
        assert_eq!(section, state.active_section);
    }
}

#[test]
fn desktop_click_leaves_a_closed_menu_closed() {
    setup();

    let mut state = UiState::default();
    state.select_section(Section::Proyectos);
    assert!(!state.is_menu_open);
    assert_eq!(Section::Proyectos, state.active_section);
}

#[test]
fn scrolling_does_not_touch_the_menu_or_section() {
    setup();

    let mut state = UiState::default();
    state.toggle_menu();
    state.select_section(Section::Habilidades);
    state.toggle_menu();
    state.record_scroll(800.0);
    assert!(state.is_menu_open);
    assert_eq!(Section::Habilidades, state.active_section);
}
