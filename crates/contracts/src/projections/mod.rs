pub mod p901_kpi_summary;
