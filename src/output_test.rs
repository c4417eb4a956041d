#[cfg(test)]
mod tests {
    use crate::cluster::{PlaceId, Point, marker_cluster};
    use crate::output::{join_members, write_csv, write_json};

    fn sample() -> Vec<Point> {
        vec![
            Point::new(1, 37.5665, 126.9780).with_category("cafe"),
            Point::new(2, 37.5666, 126.9781),
            Point::new("far", 38.0, 127.5),
        ]
    }

    #[test]
    fn test_write_csv() {
        let points = sample();
        let clusters = marker_cluster(&points, 8);
        let mut out = Vec::new();
        write_csv(&mut out, &clusters, &points).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "id,is_cluster,count,centroid_lat,centroid_lng,size_px,color,color_hex,members"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("cluster-2-37.56655-126.97805,true,2,"));
        assert!(lines[1].ends_with(",36,green,#22c55e,1;2"));
        assert_eq!(lines[2], "far,false,1,38,127.5,36,green,#22c55e,far");
    }

    #[test]
    fn test_write_json() {
        let points = sample();
        let clusters = marker_cluster(&points, 8);
        let mut out = Vec::new();
        write_json(&mut out, &clusters, &points).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0]["is_cluster"], true);
        assert_eq!(records[0]["count"], 2);
        assert_eq!(records[0]["members"], serde_json::json!([1, 2]));
        assert_eq!(records[0]["color"], "green");
        assert_eq!(records[0]["color_hex"], "#22c55e");
        assert_eq!(records[0]["size_px"], 36);
        assert_eq!(records[0]["bounds"]["south"], 37.5665);
        assert_eq!(records[0]["bounds"]["east"], 126.9781);

        assert_eq!(records[1]["id"], "far");
        assert_eq!(records[1]["members"], serde_json::json!(["far"]));
        assert_eq!(records[1]["centroid_lat"], 38.0);
    }

    #[test]
    fn test_join_members_escapes_delimiter() {
        let a = PlaceId::from("a;b");
        let b = PlaceId::from(r"c\d");
        let c = PlaceId::Num(7);
        assert_eq!(join_members(&[&a, &b, &c]), r"a\;b;c\\d;7");
        assert_eq!(join_members(&[&c]), "7");
        assert_eq!(join_members(&[]), "");
    }

    #[test]
    fn test_write_csv_escapes_member_ids() {
        let points = vec![
            Point::new("x;1", 37.5665, 126.9780),
            Point::new("x", 37.5666, 126.9781),
        ];
        let clusters = marker_cluster(&points, 8);
        let mut out = Vec::new();
        write_csv(&mut out, &clusters, &points).unwrap();

        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.ends_with(r",x\;1;x"), "got {}", row);
    }
}
