#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bks() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Six Chicago trips with known modes:
/// month March (3), day Friday (3), hour 8 (3), start Clark St (3),
/// end Canal St (3), route Clark St → Canal St (2), total 4725 s.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-06 08:05:00,2017-01-06 08:15:00,600,Clark St,Canal St,Subscriber,Male,1985.0
2,2017-03-03 08:15:00,2017-03-03 08:35:00,1200,Clark St,Canal St,Subscriber,Female,1990.0
3,2017-03-10 17:30:00,2017-03-10 17:35:00,300,Clark St,Lake St,Customer,,
4,2017-03-15 08:45:00,2017-03-15 09:00:00,900,State St,Canal St,Subscriber,Male,1990.0
5,2017-02-14 12:00:00,2017-02-14 12:12:05,725,Wells St,Lake St,Subscriber,,1970.0
6,2017-06-05 09:10:00,2017-06-05 09:26:40,1000,Wabash Ave,Clark St,Customer,Female,2001.0
";

/// No demographic columns.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station
1,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW
2,2017-03-11 10:14:04,2017-03-11 10:16:14,130.0,Adams Mill & Columbia Rd NW,Adams Mill & Columbia Rd NW
3,2017-03-11 12:01:00,2017-03-11 12:05:00,240.0,14th & Belmont St NW,Adams Mill & Columbia Rd NW
";

/// Twelve trips, one distinct start station each ("NYC Station 00".."11").
pub fn nyc_csv() -> String {
    let mut csv = String::from(
        "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n",
    );
    for i in 0..12 {
        csv.push_str(&format!(
            "2017-04-{:02} 10:00:00,2017-04-{:02} 10:10:00,600,NYC Station {:02},Depot,Subscriber,Male,1980\n",
            i + 1,
            i + 1,
            i
        ));
    }
    csv
}

/// Create a fresh data directory in the system temp dir holding the three
/// city files.
pub fn setup_data_dir(name: &str) -> String {
    let dir = empty_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).expect("write washington");
    fs::write(dir.join("new_york_city.csv"), nyc_csv()).expect("write nyc");
    dir.to_string_lossy().to_string()
}

/// Create (or reset) an empty directory inside the system temp dir
pub fn empty_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Path of a config file that does not exist, so defaults are used
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_test_{}_absent.conf", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

/// Run an interactive session against `data_dir` feeding `input` on stdin
pub fn explore(name: &str, data_dir: &str, input: &str) -> assert_cmd::assert::Assert {
    bks()
        .args(["--config", &no_config(name), "--data-dir", data_dir])
        .write_stdin(input)
        .assert()
}
