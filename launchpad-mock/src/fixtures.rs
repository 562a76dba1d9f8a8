use launchpad_core::{LaunchRecord, RocketRecord};

fn rec(
    flight: i64,
    mission: &str,
    date_utc: &str,
    rocket: Option<(&str, &str)>,
    success: Option<bool>,
    details: Option<&str>,
) -> LaunchRecord {
    LaunchRecord {
        flight_number: Some(flight),
        mission_name: Some(mission.to_string()),
        details: details.map(str::to_string),
        launch_success: success,
        launch_year: Some(date_utc[..4].to_string()),
        launch_date_utc: Some(date_utc.to_string()),
        rocket: rocket.map(|(name, kind)| RocketRecord {
            rocket_name: Some(name.to_string()),
            rocket_type: Some(kind.to_string()),
        }),
    }
}

/// Every fixture launch, in flight order.
pub fn all() -> Vec<LaunchRecord> {
    vec![
        rec(
            1,
            "FalconSat",
            "2006-03-24T22:30:00.000Z",
            Some(("Falcon 1", "Merlin A")),
            Some(false),
            Some("Engine failure at 33 seconds and loss of vehicle"),
        ),
        rec(
            2,
            "DemoSat",
            "2007-03-21T01:10:00.000Z",
            Some(("Falcon 1", "Merlin A")),
            Some(false),
            Some("Premature engine shutdown at T+7 min 30 s, failed to reach orbit"),
        ),
        rec(
            3,
            "Trailblazer",
            "2008-08-03T03:34:00.000Z",
            Some(("Falcon 1", "Merlin C")),
            Some(false),
            Some("Residual stage 1 thrust led to collision between stage 1 and stage 2"),
        ),
        rec(
            4,
            "RatSat",
            "2008-09-28T23:15:00.000Z",
            Some(("Falcon 1", "Merlin C")),
            Some(true),
            Some("First privately developed liquid-fuel rocket to reach orbit"),
        ),
        rec(
            5,
            "RazakSat",
            "2009-07-13T03:35:00.000Z",
            Some(("Falcon 1", "Merlin C")),
            Some(true),
            None,
        ),
        rec(
            6,
            "Falcon 9 Test Flight",
            "2010-06-04T18:45:00.000Z",
            Some(("Falcon 9", "v1.0")),
            Some(true),
            None,
        ),
        rec(
            7,
            "COTS 1",
            "2010-12-08T15:43:00.000Z",
            Some(("Falcon 9", "v1.0")),
            Some(true),
            None,
        ),
        rec(
            94,
            "CCtCap Demo Mission 2",
            "2020-05-30T19:22:00.000Z",
            Some(("Falcon 9", "FT")),
            Some(true),
            Some("First crewed orbital launch from US soil since 2011"),
        ),
        rec(
            97,
            "Starlink-9 (v1.0) & BlackSky Global 5-6",
            "2020-08-07T05:12:00.000Z",
            None,
            None,
            None,
        ),
    ]
}
