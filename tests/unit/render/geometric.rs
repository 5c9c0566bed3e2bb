//! Tests for rectangles and disks

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use texsynth::params::color::Rgb;
    use texsynth::params::model::{Material, ParameterModel, Pattern};
    use texsynth::render::canvas::{allocate, fill};
    use texsynth::render::geometric::{Disk, Rect, fill_disk, render, shape_count};

    const INK: Rgb = Rgb([0, 0, 255]);
    const PAPER: Rgb = Rgb([255, 255, 255]);

    // Tests the shape count is a quarter of the shorter side
    // Verified by using the longer side
    #[test]
    fn test_shape_count() {
        assert_eq!(shape_count(32, 20), 5);
        assert_eq!(shape_count(3, 100), 0);
    }

    // Tests random rectangles respect their placement and size ranges
    // Verified by sampling the corner over the full axis
    #[test]
    fn test_random_rect_ranges() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let rect = Rect::random(100, 50, &mut rng);
            assert!((0..70).contains(&rect.x), "{rect:?}");
            assert!((0..35).contains(&rect.y), "{rect:?}");
            assert!((10..40).contains(&rect.width), "{rect:?}");
            assert!((5..20).contains(&rect.height), "{rect:?}");
        }
    }

    // Tests rectangles overhanging the edge paint only the visible part
    // Verified by clamping the overhang onto the last column
    #[test]
    fn test_rect_overhang() {
        let mut buffer = allocate(32, 32).unwrap();
        fill(&mut buffer, PAPER);
        Rect {
            x: 30,
            y: 28,
            width: 10,
            height: 10,
        }
        .fill(&mut buffer, INK);

        let painted = buffer.pixels().filter(|p| **p == INK.to_rgba()).count();
        assert_eq!(painted, 2 * 4);
        assert_eq!(*buffer.get_pixel(31, 31), INK.to_rgba());
        assert_eq!(*buffer.get_pixel(29, 31), PAPER.to_rgba());
    }

    // Tests disks are strict interiors of their radius
    // Verified by comparing with less-or-equal
    #[test]
    fn test_fill_disk() {
        let mut buffer = allocate(9, 9).unwrap();
        fill(&mut buffer, PAPER);
        fill_disk(&mut buffer, (4.0, 4.0), 2.0, INK);

        assert_eq!(*buffer.get_pixel(4, 4), INK.to_rgba());
        assert_eq!(*buffer.get_pixel(5, 5), INK.to_rgba());
        assert_eq!(*buffer.get_pixel(6, 4), PAPER.to_rgba());
        assert_eq!(buffer.pixels().filter(|p| **p == INK.to_rgba()).count(), 9);
    }

    // Tests a full render only uses flat palette colours
    // Verified by jittering shape colours
    #[test]
    fn test_render_palette_only() {
        let params = ParameterModel::new(
            vec![PAPER, INK, Rgb([9, 9, 9])],
            Pattern::Geometric,
            0.5,
            0.5,
            Material::Fabric,
        )
        .unwrap();
        let mut buffer = allocate(40, 24).unwrap();
        fill(&mut buffer, params.base_color());
        render(&mut buffer, &params, &mut StdRng::seed_from_u64(23));
        assert!(
            buffer
                .pixels()
                .all(|p| params.colors().iter().any(|c| c.to_rgba() == *p))
        );
        assert!(buffer.pixels().any(|p| *p != PAPER.to_rgba()));
    }

    // Tests random disks stay within their centre and radius ranges
    // Verified by sizing the radius from the longer side
    #[test]
    fn test_random_disk_ranges() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..500 {
            let disk = Disk::random(100, 40, &mut rng);
            assert!((0.0..100.0).contains(&disk.center.0), "{disk:?}");
            assert!((0.0..40.0).contains(&disk.center.1), "{disk:?}");
            assert!((2.0..10.0).contains(&disk.radius), "{disk:?}");
        }
    }

    // Tests the single shape on a small canvas takes the first palette colour
    // Verified by choosing shape colours at random from the palette
    #[test]
    fn test_shape_colour_follows_index() {
        let first = Rgb([200, 0, 0]);
        let second = Rgb([0, 200, 0]);
        let params =
            ParameterModel::new(vec![first, second], Pattern::Geometric, 0.5, 0.5, Material::Fabric)
                .unwrap();
        assert_eq!(shape_count(7, 7), 1);

        let mut painted = 0;
        for seed in 0..64 {
            let mut buffer = allocate(7, 7).unwrap();
            fill(&mut buffer, PAPER);
            render(&mut buffer, &params, &mut StdRng::seed_from_u64(seed));
            for pixel in buffer.pixels().filter(|p| **p != PAPER.to_rgba()) {
                assert_eq!(*pixel, first.to_rgba(), "seed {seed}");
                painted += 1;
            }
        }
        assert!(painted > 0);
    }
}
