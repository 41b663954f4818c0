pub mod u001_reports;
