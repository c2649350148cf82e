pub mod floyd_warshall;
