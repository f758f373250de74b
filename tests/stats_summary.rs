use chrono::NaiveDate;
use weather_dash::models::WeatherRecord;
use weather_dash::stats::country_summary;

fn rec(country: &str, day: u32, temp: f64, min: f64, max: f64) -> WeatherRecord {
    WeatherRecord {
        country: country.into(),
        date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
        temp,
        min,
        max,
    }
}

#[test]
fn summaries_group_by_country_in_order() {
    let rows = vec![
        rec("US", 1, 50.0, 44.0, 58.0),
        rec("Indonesia", 1, 80.0, 76.0, 85.0),
        rec("Indonesia", 2, 82.0, 77.0, 88.0),
        rec("US", 2, 52.0, 40.0, 60.0),
    ];
    let got = country_summary(&rows);

    assert_eq!(got.len(), 2);
    assert_eq!(got[0].country, "Indonesia");
    assert_eq!(got[1].country, "US");

    let indo = &got[0];
    assert_eq!(indo.count, 2);
    assert_eq!(indo.temp_min, Some(80.0));
    assert_eq!(indo.temp_max, Some(82.0));
    assert!((indo.temp_mean.unwrap() - 81.0).abs() < 1e-9);
    assert_eq!(indo.coldest, Some(76.0));
    assert_eq!(indo.hottest, Some(88.0));

    let us = &got[1];
    assert_eq!(us.coldest, Some(40.0));
    assert_eq!(us.hottest, Some(60.0));
}

#[test]
fn empty_input_yields_no_summaries() {
    assert!(country_summary(&[]).is_empty());
}
