#[cfg(test)]
mod tests {
    use super::super::*;

    fn sample() -> Vec<Point> {
        vec![
            Point::new(1, 59.955982, 30.244759),
            Point::new(2, 59.955975, 30.24472),
            Point::new("cafe-3", 59.96698, 30.244358),
        ]
    }

    #[test]
    fn test_assemble_centroid_and_bounds() {
        let points = sample();
        let c1 = Cluster::assemble(&points, vec![0, 1, 2]);

        assert!(c1.is_cluster);
        assert_eq!(c1.count(), 3);
        assert!((c1.centroid.lng - 30.244612333333333).abs() < 1e-12);
        assert!((c1.centroid.lat - 59.95964566666667).abs() < 1e-12);

        let (min, max) = c1.bounds(&points).unwrap();
        assert_eq!(min.lng, 30.244358);
        assert_eq!(min.lat, 59.955975);
        assert_eq!(max.lng, 30.244759);
        assert_eq!(max.lat, 59.96698);
    }

    #[test]
    fn test_assemble_ids() {
        let points = sample();

        let single = Cluster::assemble(&points, vec![2]);
        assert!(!single.is_cluster);
        assert_eq!(single.id, "cafe-3");
        assert_eq!(single.centroid, LatLng::new(59.96698, 30.244358));

        let pair = Cluster::assemble(&points, vec![0, 1]);
        assert_eq!(pair.id, "cluster-2-59.95598-30.24474");
        // Same members, same key
        assert_eq!(pair.id, Cluster::assemble(&points, vec![0, 1]).id);
        assert_eq!(
            pair.member_ids(&points),
            vec![&PlaceId::Num(1), &PlaceId::Num(2)]
        );
    }

    #[test]
    fn test_point_rejects_non_finite_coordinates() {
        assert!(Point::new(1, f64::NAN, 30.0).coordinates.is_none());
        assert!(Point::new(1, 59.0, f64::INFINITY).coordinates.is_none());
        assert!(Point::new(1, 59.0, 30.0).coordinates.is_some());
        assert!(Point::without_coordinates(1).coordinates.is_none());
    }

    #[test]
    fn test_place_id_parse() {
        assert_eq!(PlaceId::parse("42"), PlaceId::Num(42));
        assert_eq!(PlaceId::parse(" 42 "), PlaceId::Num(42));
        assert_eq!(PlaceId::parse("a-42"), PlaceId::Text("a-42".into()));
        assert_eq!(PlaceId::Num(7).to_string(), "7");
        assert_eq!(
            serde_json::to_string(&vec![PlaceId::Num(7), PlaceId::from("x")]).unwrap(),
            r#"[7,"x"]"#
        );
    }

    #[test]
    fn test_point_rejects_out_of_range_coordinates() {
        assert!(Point::new(1, 1e30, 127.0).coordinates.is_none());
        assert!(Point::new(1, 90.0001, 127.0).coordinates.is_none());
        assert!(Point::new(1, -91.0, 127.0).coordinates.is_none());
        assert!(Point::new(1, 37.5, 180.5).coordinates.is_none());
        assert!(Point::new(1, 37.5, -1e300).coordinates.is_none());

        assert!(Point::new(1, 90.0, 180.0).coordinates.is_some());
        assert!(Point::new(1, -90.0, -180.0).coordinates.is_some());
    }

    #[test]
    fn test_place_id_parse_keeps_non_canonical_text() {
        let cases = vec![
            ("7", PlaceId::Num(7)),
            ("-12", PlaceId::Num(-12)),
            ("0", PlaceId::Num(0)),
            ("007", PlaceId::Text("007".into())),
            ("+5", PlaceId::Text("+5".into())),
            ("-0", PlaceId::Text("-0".into())),
        ];
        for (raw, expected) in cases {
            assert_eq!(PlaceId::parse(raw), expected, "raw id {:?}", raw);
        }
        assert_ne!(PlaceId::parse("007"), PlaceId::parse("7"));
        assert_eq!(PlaceId::parse("007").to_string(), "007");
    }
}
