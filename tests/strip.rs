mod tests {
    use myrtio_pixel_strip::{
        DEFAULT_BRIGHTNESS, Pin, PinControl, PixelBuffer, PixelLayout, Rgb, Strip,
    };

    #[derive(Default)]
    struct Pins {
        low: Option<Pin>,
    }

    impl PinControl for Pins {
        fn set_low(&mut self, pin: Pin) {
            self.low = Some(pin);
        }
    }

    fn bytes<const N: usize>(buffer: &PixelBuffer<N>) -> [u8; 64] {
        let mut out = [0; 64];
        buffer.with_bytes(|bytes| out[..bytes.len()].copy_from_slice(bytes));
        out
    }

    fn colors<const N: usize>(strip: &Strip<'_, N>) -> [u8; 10] {
        core::array::from_fn(|i| strip.pixel(i).map_or(0, |color| color.r))
    }

    #[test]
    fn test_create_defaults() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut pins = Pins::default();
        let strip = Strip::create(&buffer, Pin(2), &mut pins);

        assert_eq!(pins.low, Some(Pin(2)));
        assert_eq!(strip.length(), 10);
        assert_eq!(strip.start(), 0);
        assert_eq!(strip.brightness(), DEFAULT_BRIGHTNESS);
        assert_eq!(strip.layout(), PixelLayout::Grb);
        assert_eq!(strip.matrix_width(), 0);
    }

    #[test]
    fn test_set_pixel_color_grb() {
        let buffer = PixelBuffer::<12>::new(3);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        strip.set_pixel_color(1, 0x12_34_56);

        assert_eq!(bytes(&buffer)[..9], [0, 0, 0, 0x34, 0x12, 0x56, 0, 0, 0]);
        assert_eq!(strip.pixel(1), Some(Rgb::new(0x12, 0x34, 0x56)));
    }

    #[test]
    fn test_set_pixel_color_rgb_order() {
        let buffer = PixelBuffer::<12>::with_layout(2, PixelLayout::Rgb);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        strip.set_pixel_color(0, 0x12_34_56);

        assert_eq!(bytes(&buffer)[..6], [0x12, 0x34, 0x56, 0, 0, 0]);
    }

    #[test]
    fn test_rgbw_white_channel() {
        let buffer = PixelBuffer::<16>::with_layout(2, PixelLayout::Rgbw);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_pixel_color(1, 0xFF_00_00);
        strip.set_pixel_white(1, 255);

        assert_eq!(bytes(&buffer)[..8], [0, 0, 0, 0, 0, 127, 0, 127]);
        assert_eq!(strip.white(1), Some(127));

        strip.set_brightness(255);
        strip.set_all_white(10);
        assert_eq!(strip.white(0), Some(10));
        assert_eq!(strip.white(1), Some(10));
        assert_eq!(strip.pixel(1), Some(Rgb::new(127, 0, 0)));
    }

    #[test]
    fn test_white_ignored_without_white_channel() {
        let buffer = PixelBuffer::<12>::new(2);
        let strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_pixel_white(0, 255);
        strip.set_all_white(255);

        assert_eq!(strip.white(0), None);
        assert_eq!(bytes(&buffer), [0; 64]);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let buffer = PixelBuffer::<24>::new(8);
        let strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        let window = strip.range(2, 3);
        window.set_pixel_color(3, 0xFF_FF_FF);
        window.set_pixel_color(usize::MAX, 0xFF_FF_FF);

        assert_eq!(bytes(&buffer), [0; 64]);
        assert_eq!(window.pixel(3), None);
    }

    #[test]
    fn test_brightness_only_affects_future_writes() {
        let buffer = PixelBuffer::<12>::new(2);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_pixel_color(0, 0xFF_FF_FF);
        strip.set_brightness(64);
        strip.set_pixel_color(1, 0xFF_FF_FF);

        assert_eq!(strip.pixel(0), Some(Rgb::new(127, 127, 127)));
        assert_eq!(strip.pixel(1), Some(Rgb::new(63, 63, 63)));
    }

    #[test]
    fn test_set_all_color_stays_in_window() {
        let buffer = PixelBuffer::<24>::new(6);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        strip.range(2, 2).set_all_color(0x01_02_03);

        let expected = [0, 0, 0, 0, 0, 0, 2, 1, 3, 2, 1, 3, 0, 0, 0, 0, 0, 0];
        assert_eq!(bytes(&buffer)[..18], expected);
    }

    #[test]
    fn test_clear_stays_in_window() {
        let buffer = PixelBuffer::<24>::new(4);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        strip.set_all_color(0xFF_FF_FF);
        strip.range(1, 2).clear();

        assert_eq!(strip.pixel(0), Some(Rgb::new(255, 255, 255)));
        assert_eq!(strip.pixel(1), Some(Rgb::default()));
        assert_eq!(strip.pixel(2), Some(Rgb::default()));
        assert_eq!(strip.pixel(3), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_range_clamping() {
        let buffer = PixelBuffer::<48>::new(10);
        let strip = Strip::create(&buffer, Pin(0), &mut Pins::default());

        let window = strip.range(3, 4);
        assert_eq!((window.start(), window.length()), (3, 4));

        let window = strip.range(8, 10);
        assert_eq!((window.start(), window.length()), (8, 2));

        let window = strip.range(40, 10);
        assert_eq!((window.start(), window.length()), (9, 1));

        let nested = strip.range(2, 6).range(3, 10);
        assert_eq!((nested.start(), nested.length()), (5, 3));

        let empty = strip.range(4, 0);
        assert_eq!(empty.length(), 0);
        let still_empty = empty.range(5, 5);
        assert_eq!((still_empty.start(), still_empty.length()), (4, 0));
    }

    #[test]
    fn test_range_containment() {
        let buffer = PixelBuffer::<48>::new(12);
        let parent = Strip::create(&buffer, Pin(0), &mut Pins::default()).range(2, 7);
        for start in 0..12 {
            for length in 0..12 {
                let child = parent.range(start, length);
                assert!(child.start() >= parent.start());
                assert!(child.start() + child.length() <= parent.start() + parent.length());
            }
        }
    }

    #[test]
    fn test_range_inherits_state() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut strip = Strip::create(&buffer, Pin(7), &mut Pins::default());
        strip.set_brightness(200);
        strip.set_matrix_width(5);

        let window = strip.range(1, 4);
        assert_eq!(window.brightness(), 200);
        assert_eq!(window.pin(), Pin(7));
        assert_eq!(window.matrix_width(), 0);
    }

    #[test]
    fn test_aliased_views_share_pixels() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        let window = strip.range(4, 3);
        window.set_pixel_color(0, 0xAB_CD_EF);

        assert_eq!(strip.pixel(4), Some(Rgb::new(0xAB, 0xCD, 0xEF)));
        strip.set_pixel_color(5, 0x11_22_33);
        assert_eq!(window.pixel(1), Some(Rgb::new(0x11, 0x22, 0x33)));
    }

    #[test]
    fn test_matrix_addressing() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);

        strip.set_matrix_color(0, 0, 0xFF_00_00);
        assert_eq!(strip.pixel(0), Some(Rgb::default()));

        strip.set_matrix_width(3);
        assert_eq!(strip.matrix_rows(), 3);
        strip.set_matrix_color(2, 1, 0xFF_00_00);
        assert_eq!(strip.pixel(5), Some(Rgb::new(255, 0, 0)));

        // Row 3 would hold pixel 9 but is incomplete
        strip.set_matrix_color(0, 3, 0xFF_00_00);
        strip.set_matrix_color(3, 0, 0xFF_00_00);
        assert_eq!(strip.pixel(9), Some(Rgb::default()));
        assert_eq!(strip.pixel(3), Some(Rgb::default()));

        strip.set_matrix_width(40);
        assert_eq!(strip.matrix_width(), 10);
    }

    #[test]
    fn test_shift_forward() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        for i in 0..10 {
            strip.set_pixel_color(i, (i as u32 + 1) << 16);
        }

        strip.shift(3);
        assert_eq!(colors(&strip), [0, 0, 0, 1, 2, 3, 4, 5, 6, 7]);

        strip.shift(-2);
        assert_eq!(colors(&strip), [0, 1, 2, 3, 4, 5, 6, 7, 0, 0]);

        strip.shift(25);
        assert_eq!(colors(&strip), [0; 10]);
    }

    #[test]
    fn test_shift_stays_in_window() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        for i in 0..10 {
            strip.set_pixel_color(i, (i as u32 + 1) << 16);
        }

        strip.range(2, 4).shift(1);
        assert_eq!(colors(&strip), [1, 2, 0, 3, 4, 5, 7, 8, 9, 10]);

        strip.range(2, 4).shift(-10);
        assert_eq!(colors(&strip), [1, 2, 0, 0, 0, 0, 7, 8, 9, 10]);
    }

    #[test]
    fn test_rotate_round_trip() {
        let buffer = PixelBuffer::<64>::with_layout(10, PixelLayout::Rgbw);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        for i in 0..10 {
            strip.set_pixel_color(i, (i as u32 + 1) << 16);
            strip.set_pixel_white(i, i as u8);
        }
        let original = bytes(&buffer);

        strip.rotate(3);
        assert_eq!(colors(&strip), [8, 9, 10, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(strip.white(3), Some(0));

        strip.rotate(-3);
        assert_eq!(bytes(&buffer), original);

        strip.rotate(13);
        strip.rotate(-3);
        assert_eq!(bytes(&buffer), original);
    }

    #[test]
    fn test_rotate_stays_in_window() {
        let buffer = PixelBuffer::<48>::new(10);
        let mut strip = Strip::create(&buffer, Pin(0), &mut Pins::default());
        strip.set_brightness(255);
        for i in 0..10 {
            strip.set_pixel_color(i, (i as u32 + 1) << 16);
        }

        strip.range(6, 4).rotate(-1);
        assert_eq!(colors(&strip), [1, 2, 3, 4, 5, 6, 8, 9, 10, 7]);

        strip.range(0, 0).rotate(5);
        assert_eq!(colors(&strip), [1, 2, 3, 4, 5, 6, 8, 9, 10, 7]);
    }
}
