use keymap_drawer::{Config, DrawConfig, ParseConfig};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_draw_config()(
        key_w in 1u32..400,
        key_h in 1u32..400,
        split_gap in 0u32..200,
        combo_w in 0u32..200,
        combo_h in 0u32..200,
        radius in 0u32..20,
        pad in 0u32..100,
        line_spacing in 0u32..40,
        arc_scale in 0.0..10.0f64,
        svg_style in ".{0,40}"
    ) -> DrawConfig {
        DrawConfig {
            key_w,
            key_h,
            split_gap,
            combo_w,
            combo_h,
            key_rx: radius,
            key_ry: radius,
            inner_pad_w: pad,
            outer_pad_h: pad,
            line_spacing,
            arc_radius: radius,
            arc_scale,
            svg_style,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn arb_parse_config()(
        preprocess in any::<bool>(),
        skip_binding_parsing in any::<bool>(),
        keycode_map in proptest::collection::hash_map("[A-Z_]{1,12}", ".{1,3}", 0..20)
    ) -> ParseConfig {
        ParseConfig {
            preprocess,
            skip_binding_parsing,
            keycode_map,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_config_round_trips_through_overrides(
        draw in arb_draw_config(),
        parse in arb_parse_config()
    ) {
        let config = Config::new(Some(draw), Some(parse));
        let dict = config.to_overrides().unwrap();
        let rebuilt = Config::from_overrides(&dict);
        prop_assert_eq!(rebuilt.ok(), Some(config));
    }

    #[test]
    fn test_key_w_never_moves_derived_sizes(key_w in 0u32..10_000) {
        let mut dict = keymap_drawer::Overrides::new();
        dict.insert("key_w".to_string(), key_w.into());
        let config = DrawConfig::from_overrides(&dict).unwrap();
        prop_assert_eq!(config.key_w, key_w);
        prop_assert_eq!((config.split_gap, config.combo_w, config.combo_h), (30, 28, 26));
    }
}
